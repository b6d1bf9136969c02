//! Application state — single-owner, main-thread only.
//!
//! The app owns the theme mode and acts as the router that follows the
//! panel's selection. The panel reaches the theme only through a channel, the
//! same way it would reach any other external owner.

use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use anyhow::anyhow;
use tracing::info;

use navpanel_core::{PanelSettings, Sidebar, SidebarView, ThemeMode};

use crate::router::Router;
use crate::theme::Theme;

/// Requests the panel sends to the theme owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRequest {
    Toggle,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Keyboard focus, in panel order: toggle control, routes, theme button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Toggle,
    /// Display-order index across both route groups.
    Route(usize),
    ThemeButton,
}

impl Focus {
    fn index(self, route_count: usize) -> usize {
        match self {
            Focus::Toggle => 0,
            Focus::Route(i) => i.min(route_count.saturating_sub(1)) + 1,
            Focus::ThemeButton => route_count + 1,
        }
    }

    fn from_index(i: usize, route_count: usize) -> Self {
        match i {
            0 => Focus::Toggle,
            i if i <= route_count => Focus::Route(i - 1),
            _ => Focus::ThemeButton,
        }
    }

    pub fn next(self, route_count: usize) -> Self {
        let total = route_count + 2;
        Self::from_index((self.index(route_count) + 1) % total, route_count)
    }

    pub fn prev(self, route_count: usize) -> Self {
        let total = route_count + 2;
        Self::from_index((self.index(route_count) + total - 1) % total, route_count)
    }
}

pub struct AppState {
    pub sidebar: Sidebar<'static, anyhow::Error>,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub router: Router,
    pub focus: Focus,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
    theme_rx: Receiver<ThemeRequest>,
    mounted_at: Instant,
}

impl AppState {
    pub fn new(settings: PanelSettings) -> Self {
        let (theme_tx, theme_rx) = mpsc::channel();
        let theme_mode = settings.theme;
        let router = Router::new(settings.routes.default_path(), &settings.routes);
        let sidebar = Sidebar::new(settings, move || {
            theme_tx
                .send(ThemeRequest::Toggle)
                .map_err(|_| anyhow!("theme owner is gone"))
        });
        Self {
            sidebar,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            router,
            focus: Focus::Toggle,
            running: true,
            status_message: None,
            theme_rx,
            mounted_at: Instant::now(),
        }
    }

    pub fn view(&self) -> SidebarView {
        self.sidebar.view()
    }

    pub fn route_count(&self) -> usize {
        self.sidebar.routes().len()
    }

    /// Offset of `now` from mount.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.mounted_at)
    }

    /// Advance the panel clock to wall time.
    pub fn tick(&mut self, now: Instant) {
        let at = self.elapsed_at(now);
        self.tick_at(at);
    }

    /// Advance the panel clock to an offset from mount.
    pub fn tick_at(&mut self, at: Duration) {
        self.sidebar.advance_to(at);
    }

    /// How long the event loop may block before the next reveal is due,
    /// capped at `max` so staggered items keep animating.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        let elapsed = self.elapsed_at(now);
        match self.sidebar.next_deadline() {
            Some(deadline) => deadline.saturating_sub(elapsed).min(max),
            None => max,
        }
    }

    pub fn toggle_panel(&mut self) {
        self.sidebar.toggle();
    }

    /// Select the route at a display-order index. Out of range is ignored.
    pub fn select_route(&mut self, index: usize) {
        let path = match self.sidebar.routes().nth(index) {
            Some((_, entry)) => entry.path.clone(),
            None => return,
        };
        self.sidebar.select(path);
        self.focus = Focus::Route(index);
        self.follow_selection();
    }

    pub fn switch_theme(&mut self) {
        if let Err(err) = self.sidebar.switch_theme() {
            self.set_error(format!("Theme switch failed: {err:#}"));
        }
    }

    /// Activate whatever has focus.
    pub fn activate_focus(&mut self) {
        match self.focus {
            Focus::Toggle => self.toggle_panel(),
            Focus::Route(i) => self.select_route(i),
            Focus::ThemeButton => self.switch_theme(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.route_count());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.route_count());
    }

    /// Apply queued theme requests, then hand the new mode back to the panel.
    pub fn drain_theme_requests(&mut self) {
        let mut changed = false;
        while let Ok(request) = self.theme_rx.try_recv() {
            match request {
                ThemeRequest::Toggle => {
                    self.theme_mode = self.theme_mode.flipped();
                    changed = true;
                }
            }
        }
        if changed {
            self.theme = Theme::for_mode(self.theme_mode);
            self.sidebar.sync_theme_mode(self.theme_mode);
            info!(mode = %self.theme_mode, "theme changed");
            self.set_status(format!("Theme: {}", self.theme_mode));
        }
    }

    /// Let the router follow the panel's selected path.
    pub fn follow_selection(&mut self) {
        let selected = self.sidebar.state().selected_path().to_string();
        if let Some(page) = self.router.observe(&selected, self.sidebar.routes()) {
            let message = if page.found {
                format!("Opened {}", page.title)
            } else {
                format!("No page at {}", page.path)
            };
            self.set_status(message);
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Unmount the panel. Pending reveals are cancelled.
    pub fn shutdown(&mut self) {
        self.sidebar.teardown();
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Info));
    }

    pub fn set_error(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Error));
    }
}
