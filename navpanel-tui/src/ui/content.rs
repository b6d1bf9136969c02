//! Page area — shows the page the router resolved plus key help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use navpanel_core::{PanelPhase, SidebarView};

use crate::app::AppState;
use crate::input::key_bindings_help;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &SidebarView) {
    let theme = &app.theme;
    let page = app.router.current();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted())
        .title(format!(" {} ", page.title))
        .title_style(theme.heading())
        .style(theme.surface());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    field(&mut lines, theme, "Path", &page.path);
    field(&mut lines, theme, "Panel", phase_label(view.phase));
    field(&mut lines, theme, "Theme", view.theme_mode.label());
    if !page.found {
        lines.push(Line::from(Span::styled(
            "No route is registered for this path.",
            theme.alert(),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Keys", theme.heading())));
    for (keys, desc) in key_bindings_help() {
        field(&mut lines, theme, keys, desc);
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn phase_label(phase: PanelPhase) -> &'static str {
    match phase {
        PanelPhase::Collapsed => "collapsed",
        PanelPhase::Expanding => "expanding",
        PanelPhase::Expanded => "expanded",
    }
}

fn field<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, name: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>12}  ", name), theme.heading()),
        Span::styled(value.to_string(), theme.muted()),
    ]));
}
