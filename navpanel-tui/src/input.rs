//! Keyboard input dispatch — global keys, then focus movement and activation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppState;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') => app.quit(),

        // Panel
        KeyCode::Char('b') => app.toggle_panel(),
        KeyCode::Char('t') => app.switch_theme(),

        // Focus
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.focus_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focus(),

        // Direct selection, 1-based
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_route(index);
        }

        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("b", "Collapse / expand"),
        ("↑/k, ↓/j", "Move focus"),
        ("Enter", "Activate"),
        ("1-9", "Open route"),
        ("t", "Change theme"),
    ]
}
