//! Top-level UI layout — navigation rail, page area, status bar.

pub mod content;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::AppState;

/// Rail width with labels.
pub const EXPANDED_WIDTH: u16 = 24;
/// Icon-only rail width.
pub const COLLAPSED_WIDTH: u16 = 6;

pub fn sidebar_width(opened: bool) -> u16 {
    if opened {
        EXPANDED_WIDTH
    } else {
        COLLAPSED_WIDTH
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let view = app.view();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width(view.opened)),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    sidebar::render(f, columns[0], app, &view);
    content::render(f, columns[1], app, &view);
    status_bar::render(f, chunks[1], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use navpanel_core::PanelSettings;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::time::Duration;

    fn row_text(buffer: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    fn screen(buffer: &Buffer) -> String {
        let area = buffer.area;
        (0..area.height)
            .map(|y| row_text(buffer, y, area.width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn labels_appear_after_reveal() {
        let mut app = AppState::new(PanelSettings::default());
        let before = screen(&render(&app));
        assert!(!before.contains("Messages"));
        assert!(before.contains("TensorFlow"));

        app.tick_at(Duration::from_secs(1));
        let after = screen(&render(&app));
        assert!(after.contains("Home"));
        assert!(after.contains("Messages"));
        assert!(after.contains("Support"));
        assert!(after.contains("Switch theme"));
    }

    #[test]
    fn collapsed_rail_is_icon_only() {
        let mut app = AppState::new(PanelSettings::default());
        app.tick_at(Duration::from_secs(1));
        app.toggle_panel();
        let text = screen(&render(&app));
        assert!(!text.contains("TensorFlow"));
        assert!(!text.contains("Settings"));
        assert!(!text.contains("Switch theme"));
    }

    #[test]
    fn page_follows_selection() {
        let mut app = AppState::new(PanelSettings::default());
        app.select_route(2);
        let text = screen(&render(&app));
        assert!(text.contains("Costs"));
        assert!(text.contains("/costs"));
    }

    #[test]
    fn width_contract() {
        assert_eq!(sidebar_width(true), 24);
        assert_eq!(sidebar_width(false), 6);
    }
}
