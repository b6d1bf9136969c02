//! Sidebar composition and the render boundary.
//!
//! [`Sidebar`] ties the route table, the panel state machine and the theme
//! bridge together. A view layer calls [`Sidebar::view`] once per frame and
//! gets plain booleans, strings and delays, never timer handles.

use std::time::Duration;

use tracing::info;

use crate::config::PanelSettings;
use crate::panel::{PanelPhase, PanelState};
use crate::reveal::RevealScheduler;
use crate::routes::{RouteEntry, RouteGroup, RouteModel};
use crate::theme::{ThemeBridge, ThemeMode};

/// What the toggle control offers to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleHint {
    Collapse,
    Expand,
}

impl ToggleHint {
    pub fn label(self) -> &'static str {
        match self {
            ToggleHint::Collapse => "Collapse",
            ToggleHint::Expand => "Expand",
        }
    }

    /// Icon key of the chevron on the toggle control.
    pub fn icon_key(self) -> &'static str {
        match self {
            ToggleHint::Collapse => "angle-left",
            ToggleHint::Expand => "angle-right",
        }
    }
}

/// One route as the view layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub group: RouteGroup,
    pub id: String,
    pub label: String,
    pub icon_key: String,
    pub path: String,
    /// This entry holds the selection.
    pub active: bool,
    /// Stagger wait after the group flag turns on.
    pub reveal_delay: Duration,
    /// Group flag is on and the stagger wait is over.
    pub revealed: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub opened: bool,
    pub phase: PanelPhase,
    pub selected_path: String,
    pub top_visible: bool,
    pub bottom_visible: bool,
    pub brand: String,
    pub brand_visible: bool,
    pub toggle_hint: ToggleHint,
    pub theme_mode: ThemeMode,
    pub primary: Vec<ItemView>,
    pub secondary: Vec<ItemView>,
}

impl SidebarView {
    /// Items in display order: primary, then secondary.
    pub fn items(&self) -> impl Iterator<Item = &ItemView> {
        self.primary.iter().chain(self.secondary.iter())
    }

    pub fn active_item(&self) -> Option<&ItemView> {
        self.items().find(|item| item.active)
    }
}

/// A mounted navigation panel.
pub struct Sidebar<'a, E> {
    routes: RouteModel,
    state: PanelState,
    theme: ThemeBridge<'a, E>,
    brand: String,
}

impl<'a, E> Sidebar<'a, E> {
    /// Mount a panel from validated settings and the theme owner's callback.
    pub fn new(settings: PanelSettings, on_toggle_theme: impl FnMut() -> Result<(), E> + 'a) -> Self {
        let state = PanelState::new(
            settings.opened,
            settings.routes.default_path(),
            settings.timings,
        );
        Self {
            theme: ThemeBridge::new(settings.theme, on_toggle_theme),
            routes: settings.routes,
            brand: settings.brand,
            state,
        }
    }

    pub fn routes(&self) -> &RouteModel {
        &self.routes
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    pub fn expand(&mut self) {
        self.state.expand();
    }

    pub fn collapse(&mut self) {
        self.state.collapse();
    }

    pub fn select(&mut self, path: impl Into<String>) {
        self.state.select(path);
    }

    /// Select the entry with `id`. Returns false, leaving the selection
    /// alone, if there is no such entry.
    pub fn select_id(&mut self, id: &str) -> bool {
        match self.routes.find_by_id(id) {
            Some((_, entry)) => {
                let path = entry.path.clone();
                self.state.select(path);
                true
            }
            None => false,
        }
    }

    /// Forward a theme switch to the owner.
    pub fn switch_theme(&mut self) -> Result<(), E> {
        info!(from = %self.theme.mode(), "theme switch requested");
        self.theme.invoke_toggle()
    }

    /// Take the owner's current theme mode.
    pub fn sync_theme_mode(&mut self, mode: ThemeMode) {
        self.theme.sync_mode(mode);
    }

    pub fn advance_to(&mut self, at: Duration) {
        self.state.advance_to(at);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.next_deadline()
    }

    /// Unmount: cancel every pending reveal.
    pub fn teardown(&mut self) {
        self.state.teardown();
    }

    pub fn view(&self) -> SidebarView {
        // With aliased paths only the first entry in display order is active.
        let active = self
            .routes
            .find_by_path(self.state.selected_path())
            .map(|(group, entry)| (group, entry.id.as_str()));
        let opened = self.state.opened();

        SidebarView {
            opened,
            phase: self.state.phase(),
            selected_path: self.state.selected_path().to_string(),
            top_visible: self.state.top_visible(),
            bottom_visible: self.state.bottom_visible(),
            brand: self.brand.clone(),
            brand_visible: opened,
            toggle_hint: if opened {
                ToggleHint::Collapse
            } else {
                ToggleHint::Expand
            },
            theme_mode: self.theme.mode(),
            primary: self.group_view(RouteGroup::Primary, active),
            secondary: self.group_view(RouteGroup::Secondary, active),
        }
    }

    fn group_view(&self, group: RouteGroup, active: Option<(RouteGroup, &str)>) -> Vec<ItemView> {
        let entries = self.routes.group(group);
        let len = entries.len();
        let reveal = self.state.reveal();
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| item_view(group, index, len, entry, active, reveal))
            .collect()
    }
}

fn item_view(
    group: RouteGroup,
    index: usize,
    len: usize,
    entry: &RouteEntry,
    active: Option<(RouteGroup, &str)>,
    reveal: &RevealScheduler,
) -> ItemView {
    ItemView {
        group,
        id: entry.id.clone(),
        label: entry.label.clone(),
        icon_key: entry.icon_key.clone(),
        path: entry.path.clone(),
        active: active == Some((group, entry.id.as_str())),
        reveal_delay: reveal.timings().item_delay(group, index, len),
        revealed: reveal.item_revealed(group, index, len),
    }
}

impl<E> std::fmt::Debug for Sidebar<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sidebar")
            .field("routes", &self.routes)
            .field("state", &self.state)
            .field("theme", &self.theme)
            .field("brand", &self.brand)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn sidebar(opened: bool) -> Sidebar<'static, Infallible> {
        let settings = PanelSettings {
            opened,
            ..PanelSettings::default()
        };
        Sidebar::new(settings, || Ok(()))
    }

    #[test]
    fn initial_view() {
        let bar = sidebar(true);
        let view = bar.view();
        assert!(view.opened);
        assert_eq!(view.phase, PanelPhase::Expanding);
        assert_eq!(view.selected_path, "/");
        assert_eq!(view.toggle_hint, ToggleHint::Collapse);
        assert!(view.brand_visible);
        assert_eq!(view.primary.len(), 6);
        assert_eq!(view.secondary.len(), 2);
        assert_eq!(view.active_item().map(|i| i.id.as_str()), Some("home"));
        assert!(view.items().all(|i| !i.revealed));
    }

    #[test]
    fn collapsed_view_hides_brand_and_offers_expand() {
        let view = sidebar(false).view();
        assert!(!view.brand_visible);
        assert_eq!(view.toggle_hint, ToggleHint::Expand);
        assert_eq!(view.toggle_hint.icon_key(), "angle-right");
    }

    #[test]
    fn view_carries_stagger_delays() {
        let bar = sidebar(false);
        let view = bar.view();
        let primary: Vec<_> = view.primary.iter().map(|i| i.reveal_delay).collect();
        assert_eq!(primary, vec![ms(0), ms(60), ms(120), ms(180), ms(240), ms(300)]);
        let secondary: Vec<_> = view.secondary.iter().map(|i| i.reveal_delay).collect();
        assert_eq!(secondary, vec![ms(60), ms(0)]);
    }

    #[test]
    fn exactly_one_active_entry() {
        let mut bar = sidebar(true);
        bar.select("/sales");
        let view = bar.view();
        assert_eq!(view.items().filter(|i| i.active).count(), 1);
        assert_eq!(view.active_item().unwrap().id, "sales");

        bar.select("/settings");
        let view = bar.view();
        assert_eq!(view.items().filter(|i| i.active).count(), 1);
        assert_eq!(view.active_item().unwrap().group, RouteGroup::Secondary);
    }

    #[test]
    fn unknown_path_leaves_nothing_active() {
        let mut bar = sidebar(true);
        bar.select("/reports");
        let view = bar.view();
        assert_eq!(view.selected_path, "/reports");
        assert!(view.active_item().is_none());
    }

    #[test]
    fn select_id_resolves_path() {
        let mut bar = sidebar(true);
        assert!(bar.select_id("payments"));
        assert_eq!(bar.state().selected_path(), "/payments");
        assert!(!bar.select_id("nope"));
        assert_eq!(bar.state().selected_path(), "/payments");
    }

    #[test]
    fn items_reveal_in_cascade() {
        let mut bar = sidebar(false);
        bar.toggle();
        bar.advance_to(ms(150));
        let view = bar.view();
        let revealed: Vec<_> = view.primary.iter().map(|i| i.revealed).collect();
        assert_eq!(revealed, vec![true, true, false, false, false, false]);
        assert!(view.secondary.iter().all(|i| !i.revealed));

        bar.advance_to(ms(200));
        let view = bar.view();
        let revealed: Vec<_> = view.secondary.iter().map(|i| i.revealed).collect();
        assert_eq!(revealed, vec![false, true]);
    }

    #[test]
    fn switch_theme_calls_owner() {
        use std::cell::Cell;
        let calls = Cell::new(0);
        let mut bar: Sidebar<'_, Infallible> = Sidebar::new(PanelSettings::default(), || {
            calls.set(calls.get() + 1);
            Ok(())
        });
        bar.switch_theme().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(bar.theme_mode(), ThemeMode::Light);

        bar.sync_theme_mode(ThemeMode::Dark);
        assert_eq!(bar.view().theme_mode, ThemeMode::Dark);
    }
}
