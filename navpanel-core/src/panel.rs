//! Panel state machine — open/collapsed, selection, and the reveal cascade.
//!
//! Single-owner and single-threaded. Time only moves when the owner calls
//! [`PanelState::advance_to`] with an offset from mount, which makes every
//! transition reproducible in tests.

use std::time::Duration;

use tracing::debug;

use crate::reveal::{RevealScheduler, RevealTimings};
use crate::routes::RouteGroup;

/// Macro state, derived from `opened` and the pending reveals.
///
/// There is no collapsing state: collapse is immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Collapsed,
    /// Opened, at least one group reveal still pending.
    Expanding,
    Expanded,
}

#[derive(Debug)]
pub struct PanelState {
    opened: bool,
    selected_path: String,
    reveal: RevealScheduler,
}

impl PanelState {
    /// Mount a panel. An initially opened panel starts its reveal right away,
    /// exactly as if it had just been expanded.
    pub fn new(opened: bool, default_path: impl Into<String>, timings: RevealTimings) -> Self {
        let mut state = Self {
            opened,
            selected_path: default_path.into(),
            reveal: RevealScheduler::new(timings),
        };
        if opened {
            state.reveal.begin_reveal();
        }
        state
    }

    pub fn opened(&self) -> bool {
        self.opened
    }

    pub fn selected_path(&self) -> &str {
        &self.selected_path
    }

    pub fn top_visible(&self) -> bool {
        self.reveal.is_visible(RouteGroup::Primary)
    }

    pub fn bottom_visible(&self) -> bool {
        self.reveal.is_visible(RouteGroup::Secondary)
    }

    pub fn phase(&self) -> PanelPhase {
        if !self.opened {
            PanelPhase::Collapsed
        } else if self.reveal.is_pending(RouteGroup::Primary)
            || self.reveal.is_pending(RouteGroup::Secondary)
        {
            PanelPhase::Expanding
        } else {
            PanelPhase::Expanded
        }
    }

    pub fn reveal(&self) -> &RevealScheduler {
        &self.reveal
    }

    /// Current offset from mount.
    pub fn now(&self) -> Duration {
        self.reveal.now()
    }

    /// When the owner should next call [`advance_to`](Self::advance_to).
    pub fn next_deadline(&self) -> Option<Duration> {
        self.reveal.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.reveal.pending_timers()
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) {
        if self.opened {
            self.collapse();
        } else {
            self.expand();
        }
    }

    /// Open the panel and restart the staggered reveal. No-op when already open.
    pub fn expand(&mut self) {
        if self.opened {
            return;
        }
        self.opened = true;
        self.reveal.begin_reveal();
        debug!(at = ?self.now(), "panel expanding");
    }

    /// Close the panel, cancelling pending reveals and hiding both groups.
    /// No-op when already collapsed.
    pub fn collapse(&mut self) {
        if !self.opened {
            return;
        }
        self.opened = false;
        self.reveal.hide_all();
        debug!(at = ?self.now(), "panel collapsed");
    }

    /// Record the selected path. Any path is accepted; the router that
    /// observes the selection decides what an unknown path means.
    pub fn select(&mut self, path: impl Into<String>) {
        self.selected_path = path.into();
        debug!(path = %self.selected_path, "route selected");
    }

    /// Advance to `at` (offset from mount), firing due reveals in order.
    pub fn advance_to(&mut self, at: Duration) {
        self.reveal.advance_to(at);
    }

    /// Advance by `delta` from the current offset.
    pub fn advance_by(&mut self, delta: Duration) {
        let at = self.now() + delta;
        self.advance_to(at);
    }

    /// Cancel every pending reveal. Called on unmount and from `Drop`.
    pub fn teardown(&mut self) {
        let cancelled = self.reveal.cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "panel torn down with pending reveals");
        }
    }
}

impl Drop for PanelState {
    fn drop(&mut self) {
        self.teardown();
    }
}
