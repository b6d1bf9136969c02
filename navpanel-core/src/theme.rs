//! Theme bridge — relays the caller's theme mode and toggle callback.
//!
//! The panel never owns or changes the theme. It shows the mode it was given
//! and forwards the user's switch request to whoever does own it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode. For owners of the theme; the bridge never calls it.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode '{other}' (expected light or dark)")),
        }
    }
}

type ToggleFn<'a, E> = Box<dyn FnMut() -> Result<(), E> + 'a>;

/// Current mode plus the externally supplied toggle callback.
pub struct ThemeBridge<'a, E> {
    mode: ThemeMode,
    on_toggle: ToggleFn<'a, E>,
}

impl<'a, E> ThemeBridge<'a, E> {
    pub fn new(mode: ThemeMode, on_toggle: impl FnMut() -> Result<(), E> + 'a) -> Self {
        Self {
            mode,
            on_toggle: Box::new(on_toggle),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Take a new mode from the owner, like a re-render with fresh props.
    pub fn sync_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Call the owner's callback once. Errors come back untouched.
    pub fn invoke_toggle(&mut self) -> Result<(), E> {
        (self.on_toggle)()
    }
}

impl<E> fmt::Debug for ThemeBridge<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeBridge")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::convert::Infallible;

    #[test]
    fn invokes_callback_once_per_call() {
        let calls = Cell::new(0);
        let mut bridge = ThemeBridge::new(ThemeMode::Light, || {
            calls.set(calls.get() + 1);
            Ok::<(), Infallible>(())
        });

        bridge.invoke_toggle().unwrap();
        assert_eq!(calls.get(), 1);
        bridge.invoke_toggle().unwrap();
        assert_eq!(calls.get(), 2);
        // The bridge itself never flips the mode.
        assert_eq!(bridge.mode(), ThemeMode::Light);
    }

    #[test]
    fn callback_errors_propagate() {
        let mut bridge = ThemeBridge::new(ThemeMode::Dark, || Err("owner went away"));
        assert_eq!(bridge.invoke_toggle(), Err("owner went away"));
    }

    #[test]
    fn sync_mode_follows_owner() {
        let mut bridge = ThemeBridge::new(ThemeMode::Light, || Ok::<(), Infallible>(()));
        bridge.sync_mode(ThemeMode::Dark);
        assert_eq!(bridge.mode(), ThemeMode::Dark);
    }

    #[test]
    fn parse_mode() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("LIGHT".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Light.flipped(), ThemeMode::Dark);
    }
}
