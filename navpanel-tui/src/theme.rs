//! Light/dark palette tokens for the navigation panel.
//!
//! The core only knows a [`ThemeMode`]; this is the lookup table that turns
//! the mode into colours.
//!
//! # Color Palette
//! - **Sidebar background**: white (light) / graphite (dark)
//! - **Active row**: pale lavender (light) / raised graphite (dark)
//! - **Text**: slate grey (light) / near-white (dark)
//! - **Active text**: deep blue (light) / near-white (dark)
//! - **Logo**: deep blue (light) / bright blue (dark)

use ratatui::style::{Color, Modifier, Style};

use navpanel_core::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Panel surface
    pub sidebar_bg: Color,
    /// Focused row
    pub sidebar_bg_hover: Color,
    /// Selected row
    pub sidebar_bg_active: Color,
    pub text: Color,
    /// Text on the focused row
    pub text_hover: Color,
    /// Text on the selected row
    pub text_active: Color,
    pub logo: Color,
    pub button_bg: Color,
    /// Focused button
    pub button_bg_active: Color,
    /// Warnings and errors in the status bar
    pub alert: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            sidebar_bg: Color::Rgb(255, 255, 255),
            sidebar_bg_hover: Color::Rgb(240, 242, 255),
            sidebar_bg_active: Color::Rgb(240, 242, 255),
            text: Color::Rgb(151, 165, 185),
            text_hover: Color::Rgb(9, 27, 49),
            text_active: Color::Rgb(0, 0, 181),
            logo: Color::Rgb(0, 0, 181),
            button_bg: Color::Rgb(255, 255, 255),
            button_bg_active: Color::Rgb(226, 232, 240),
            alert: Color::Rgb(200, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            sidebar_bg: Color::Rgb(32, 33, 39),
            sidebar_bg_hover: Color::Rgb(45, 46, 52),
            sidebar_bg_active: Color::Rgb(57, 58, 63),
            text: Color::Rgb(240, 242, 255),
            text_hover: Color::Rgb(240, 242, 255),
            text_active: Color::Rgb(240, 242, 255),
            logo: Color::Rgb(59, 130, 246),
            button_bg: Color::Rgb(32, 33, 39),
            button_bg_active: Color::Rgb(75, 89, 102),
            alert: Color::Rgb(255, 110, 110),
        }
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.sidebar_bg)
    }

    pub fn brand(&self) -> Style {
        Style::default()
            .fg(self.logo)
            .bg(self.sidebar_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Route row. Selection wins over focus for the background; focus is
    /// always underlined so it stays visible on the selected row.
    pub fn item(&self, active: bool, focused: bool) -> Style {
        let style = match (active, focused) {
            (true, _) => Style::default()
                .fg(self.text_active)
                .bg(self.sidebar_bg_active)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(self.text_hover).bg(self.sidebar_bg_hover),
            (false, false) => self.surface(),
        };
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn button(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.text_hover)
                .bg(self.button_bg_active)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.text).bg(self.button_bg)
        }
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_active)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn alert(&self) -> Style {
        Style::default().fg(self.alert).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.sidebar_bg, Color::Rgb(255, 255, 255));
        assert_eq!(theme.logo, Color::Rgb(0, 0, 181));
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::light());
        assert_eq!(Theme::dark().sidebar_bg, Color::Rgb(32, 33, 39));
    }

    #[test]
    fn test_item_style() {
        let theme = Theme::light();
        assert_eq!(theme.item(true, false).bg, Some(theme.sidebar_bg_active));
        assert_eq!(theme.item(true, false).fg, Some(theme.text_active));
        assert_eq!(theme.item(false, true).fg, Some(theme.text_hover));
        assert_eq!(theme.item(false, false).fg, Some(theme.text));
        assert!(theme
            .item(true, true)
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_button_style() {
        let theme = Theme::dark();
        assert_eq!(theme.button(true).bg, Some(theme.button_bg_active));
        assert_eq!(theme.button(false).bg, Some(theme.button_bg));
    }
}
