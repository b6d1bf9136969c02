//! Navigation rail — brand row with toggle, route groups, theme button.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use navpanel_core::{ItemView, SidebarView, ThemeMode};

use crate::app::{AppState, Focus};
use crate::theme::Theme;

const BRAND_MARK: &str = "◆";

/// Terminal glyph for an icon key.
pub fn icon_glyph(icon_key: &str) -> &'static str {
    match icon_key {
        "house" => "⌂",
        "chart-line" => "↗",
        "chart-column" => "▥",
        "wallet" => "¤",
        "chart-pie" => "◔",
        "envelope" => "✉",
        "sliders" => "≡",
        "phone-volume" => "☏",
        "angle-left" => "«",
        "angle-right" => "»",
        _ => "•",
    }
}

fn theme_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "◐",
        ThemeMode::Dark => "◑",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState, view: &SidebarView) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.muted().bg(theme.sidebar_bg))
        .style(theme.surface());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let secondary_rows = u16::try_from(view.secondary.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(secondary_rows),
            Constraint::Length(2),
        ])
        .split(inner);

    render_brand(f, chunks[0], app, view);
    render_group(f, chunks[1], app, view, &view.primary, 0);
    render_group(f, chunks[2], app, view, &view.secondary, view.primary.len());
    render_theme_button(f, chunks[3], app, view);
}

fn render_brand(f: &mut Frame, area: Rect, app: &AppState, view: &SidebarView) {
    let theme = &app.theme;
    let chevron = Span::styled(
        format!(" {} ", icon_glyph(view.toggle_hint.icon_key())),
        theme.button(app.focus == Focus::Toggle),
    );

    let mut spans = vec![Span::styled(format!(" {BRAND_MARK}"), theme.brand())];
    if view.brand_visible {
        let label = format!(" {}", view.brand);
        // Push the chevron to the right edge.
        let used = 2 + label.chars().count() + 3;
        let pad = usize::from(area.width).saturating_sub(used);
        spans.push(Span::styled(label, theme.brand()));
        spans.push(Span::styled(" ".repeat(pad), theme.surface()));
    }
    spans.push(chevron);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_group(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    view: &SidebarView,
    items: &[ItemView],
    focus_offset: usize,
) {
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let focused = app.focus == Focus::Route(focus_offset + i);
            item_line(&app.theme, item, view.opened, focused, area.width)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn item_line(theme: &Theme, item: &ItemView, opened: bool, focused: bool, width: u16) -> Line<'static> {
    // Labels show only once the item's own stagger wait is over.
    let text = if opened && item.revealed {
        format!(" {} {}", icon_glyph(&item.icon_key), item.label)
    } else {
        format!(" {}", icon_glyph(&item.icon_key))
    };
    Line::from(Span::styled(
        pad_to(text, width),
        theme.item(item.active, focused),
    ))
}

fn render_theme_button(f: &mut Frame, area: Rect, app: &AppState, view: &SidebarView) {
    let glyph = theme_glyph(view.theme_mode);
    let text = if view.opened {
        format!(" {glyph} Switch theme")
    } else {
        format!(" {glyph}")
    };
    let style = app.theme.button(app.focus == Focus::ThemeButton);
    let line = Line::from(Span::styled(pad_to(text, area.width), style));
    // Leave a blank row above the button.
    let para = Paragraph::new(vec![Line::from(""), line]);
    f.render_widget(para, area);
}

fn pad_to(text: String, width: u16) -> String {
    let width = usize::from(width);
    let len = text.chars().count();
    if len >= width {
        text
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}
