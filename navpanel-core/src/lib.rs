//! navpanel core — the interaction model of a collapsible navigation panel.
//!
//! Provides:
//! - Route table with two ordered groups (primary at the top, secondary at the bottom)
//! - Cancellable timers on a virtual clock
//! - Staggered reveal of each group after the panel expands
//! - The open/collapse/select state machine
//! - A theme bridge that forwards switch requests to the theme owner
//! - A per-frame view snapshot for any rendering layer
//!
//! Rendering, real navigation and colour palettes live outside this crate.

pub mod config;
pub mod error;
pub mod panel;
pub mod reveal;
pub mod routes;
pub mod theme;
pub mod timer;
pub mod view;

pub use config::{PanelConfig, PanelSettings, TimingsConfig};
pub use error::ConfigError;
pub use panel::{PanelPhase, PanelState};
pub use reveal::{stagger_delay, RevealScheduler, RevealTimings};
pub use routes::{RouteEntry, RouteGroup, RouteModel};
pub use theme::{ThemeBridge, ThemeMode};
pub use timer::{TimerHandle, TimerQueue};
pub use view::{ItemView, Sidebar, SidebarView, ToggleHint};
