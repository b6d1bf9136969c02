//! navpanel TUI - terminal front end for the collapsible navigation panel
//!
//! Renders the panel's per-frame view with ratatui:
//! - Rail that collapses to icons and expands to labels
//! - Staggered label reveal after expanding
//! - Selected route highlight and a page area that follows it
//! - Light/dark palettes switched through the panel's theme button

pub mod app;
pub mod input;
pub mod router;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;
