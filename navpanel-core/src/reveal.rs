//! Reveal scheduling — group visibility flags and per-item stagger.
//!
//! Each group has one visibility flag driven by one delayed trigger. The top
//! group is triggered first, the bottom group later, giving a top-to-bottom
//! cascade. Inside a visible group every item waits an extra stagger delay
//! proportional to its position before it shows.

use std::time::Duration;

use tracing::trace;

use crate::error::ConfigError;
use crate::routes::RouteGroup;
use crate::timer::{TimerHandle, TimerQueue};

pub const DEFAULT_TOP_REVEAL: Duration = Duration::from_millis(80);
pub const DEFAULT_BOTTOM_REVEAL: Duration = Duration::from_millis(200);
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(60);

/// Animation parameters. Only `top < bottom` affects correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimings {
    top: Duration,
    bottom: Duration,
    stagger: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_REVEAL,
            bottom: DEFAULT_BOTTOM_REVEAL,
            stagger: DEFAULT_STAGGER,
        }
    }
}

impl RevealTimings {
    pub fn new(top: Duration, bottom: Duration, stagger: Duration) -> Result<Self, ConfigError> {
        if top >= bottom {
            return Err(ConfigError::RevealOrder { top, bottom });
        }
        Ok(Self {
            top,
            bottom,
            stagger,
        })
    }

    /// Delay from expand to the group flag turning on.
    pub fn group_delay(&self, group: RouteGroup) -> Duration {
        match group {
            RouteGroup::Primary => self.top,
            RouteGroup::Secondary => self.bottom,
        }
    }

    pub fn stagger(&self) -> Duration {
        self.stagger
    }

    /// Extra wait for item `index` of a group of `len` items.
    pub fn item_delay(&self, group: RouteGroup, index: usize, len: usize) -> Duration {
        stagger_delay(group, index, len, self.stagger)
    }
}

/// Per-item stagger: ascending for the top group, descending for the bottom
/// group so it cascades upward toward the toggle control.
///
/// Out-of-range indexes in the bottom group clamp to zero.
pub fn stagger_delay(group: RouteGroup, index: usize, len: usize, step: Duration) -> Duration {
    let slot = match group {
        RouteGroup::Primary => index,
        RouteGroup::Secondary => len.saturating_sub(index + 1),
    };
    step * u32::try_from(slot).unwrap_or(u32::MAX)
}

/// Reveal state of one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GroupReveal {
    visible: bool,
    visible_since: Option<Duration>,
    handle: Option<TimerHandle>,
}

/// Owns the two group flags and the timers that raise them.
#[derive(Debug)]
pub struct RevealScheduler {
    timings: RevealTimings,
    timers: TimerQueue<RouteGroup>,
    top: GroupReveal,
    bottom: GroupReveal,
}

impl RevealScheduler {
    pub fn new(timings: RevealTimings) -> Self {
        Self {
            timings,
            timers: TimerQueue::new(),
            top: GroupReveal::default(),
            bottom: GroupReveal::default(),
        }
    }

    pub fn timings(&self) -> &RevealTimings {
        &self.timings
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Hide both groups and schedule a fresh reveal for each.
    ///
    /// Any reveal still pending from an earlier expand is cancelled first.
    pub fn begin_reveal(&mut self) {
        for group in [RouteGroup::Primary, RouteGroup::Secondary] {
            self.cancel_group(group);
            let delay = self.timings.group_delay(group);
            let handle = self.timers.schedule(delay, group);
            trace!(%group, deadline = ?handle.deadline(), "reveal scheduled");
            self.slot_mut(group).handle = Some(handle);
        }
    }

    /// Cancel both pending reveals and hide both groups immediately.
    pub fn hide_all(&mut self) {
        self.cancel_group(RouteGroup::Primary);
        self.cancel_group(RouteGroup::Secondary);
    }

    /// Advance the clock, firing every reveal due at or before `at`.
    pub fn advance_to(&mut self, at: Duration) {
        while let Some((handle, group)) = self.timers.pop_due(at) {
            let slot = self.slot_mut(group);
            debug_assert_eq!(slot.handle, Some(handle), "fired a superseded reveal");
            slot.handle = None;
            slot.visible = true;
            slot.visible_since = Some(handle.deadline());
            trace!(%group, at = ?handle.deadline(), "reveal fired");
        }
        self.timers.set_now(at);
    }

    pub fn is_visible(&self, group: RouteGroup) -> bool {
        self.slot(group).visible
    }

    /// Whether a reveal for `group` is still waiting to fire.
    pub fn is_pending(&self, group: RouteGroup) -> bool {
        self.slot(group).handle.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Whether item `index` of a `len`-item group has finished its stagger wait.
    pub fn item_revealed(&self, group: RouteGroup, index: usize, len: usize) -> bool {
        let slot = self.slot(group);
        match (slot.visible, slot.visible_since) {
            (true, Some(since)) => {
                self.timers.now() >= since + self.timings.item_delay(group, index, len)
            }
            _ => false,
        }
    }

    /// Cancel everything. Returns how many timers were still pending.
    pub fn cancel_all(&mut self) -> usize {
        self.top = GroupReveal::default();
        self.bottom = GroupReveal::default();
        self.timers.cancel_all()
    }

    fn cancel_group(&mut self, group: RouteGroup) {
        let slot = *self.slot(group);
        if let Some(handle) = slot.handle {
            if self.timers.cancel(handle).is_some() {
                trace!(%group, "reveal cancelled");
            }
        }
        *self.slot_mut(group) = GroupReveal::default();
    }

    fn slot(&self, group: RouteGroup) -> &GroupReveal {
        match group {
            RouteGroup::Primary => &self.top,
            RouteGroup::Secondary => &self.bottom,
        }
    }

    fn slot_mut(&mut self, group: RouteGroup) -> &mut GroupReveal {
        match group {
            RouteGroup::Primary => &mut self.top,
            RouteGroup::Secondary => &mut self.bottom,
        }
    }
}
