//! Property tests for panel invariants.
//!
//! Uses proptest to verify:
//! 1. Stagger ordering — top delays ascend from zero, bottom delays descend to zero
//! 2. No reveal while collapsed — after any action sequence
//! 3. One timer per group — never more than two pending timers
//! 4. Items never reveal before their group flag

use std::convert::Infallible;
use std::time::Duration;

use navpanel_core::{stagger_delay, PanelSettings, RouteGroup, Sidebar};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Toggle,
    Select(usize),
    Wait(u64),
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Toggle),
        1 => (0usize..8).prop_map(Action::Select),
        4 => (0u64..250).prop_map(Action::Wait),
    ]
}

fn arb_step() -> impl Strategy<Value = Duration> {
    (0u64..200).prop_map(Duration::from_millis)
}

// ── 1. Stagger ordering ──────────────────────────────────────────────

proptest! {
    #[test]
    fn top_stagger_ascends_from_zero(len in 1usize..40, step in arb_step()) {
        let delays: Vec<Duration> = (0..len)
            .map(|i| stagger_delay(RouteGroup::Primary, i, len, step))
            .collect();
        prop_assert_eq!(delays[0], Duration::ZERO);
        for (i, pair) in delays.windows(2).enumerate() {
            prop_assert!(pair[0] <= pair[1]);
            prop_assert_eq!(delays[i + 1], step * (i as u32 + 1));
        }
    }

    #[test]
    fn bottom_stagger_descends_to_zero(len in 1usize..40, step in arb_step()) {
        let delays: Vec<Duration> = (0..len)
            .map(|i| stagger_delay(RouteGroup::Secondary, i, len, step))
            .collect();
        prop_assert_eq!(delays[len - 1], Duration::ZERO);
        prop_assert_eq!(delays[0], step * (len as u32 - 1));
        for pair in delays.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }
}

// ── 2-4. State machine invariants ────────────────────────────────────

proptest! {
    #[test]
    fn invariants_hold_for_any_action_sequence(
        opened in any::<bool>(),
        actions in prop::collection::vec(arb_action(), 0..60),
    ) {
        let settings = PanelSettings { opened, ..PanelSettings::default() };
        let mut bar: Sidebar<'_, Infallible> = Sidebar::new(settings, || Ok(()));
        let mut now = Duration::ZERO;

        for action in actions {
            match action {
                Action::Toggle => bar.toggle(),
                Action::Select(i) => {
                    let path = bar.routes().nth(i).map(|(_, e)| e.path.clone());
                    if let Some(path) = path {
                        bar.select(path);
                    }
                }
                Action::Wait(step) => {
                    now += Duration::from_millis(step);
                    bar.advance_to(now);
                }
            }

            let state = bar.state();
            if !state.opened() {
                prop_assert!(!state.top_visible());
                prop_assert!(!state.bottom_visible());
                prop_assert_eq!(state.pending_timers(), 0);
            }
            prop_assert!(state.pending_timers() <= 2);

            let view = bar.view();
            for item in &view.primary {
                prop_assert!(!item.revealed || view.top_visible);
            }
            for item in &view.secondary {
                prop_assert!(!item.revealed || view.bottom_visible);
            }
            prop_assert!(view.items().filter(|i| i.active).count() <= 1);
        }
    }

    #[test]
    fn expanded_panel_settles_fully(toggles in 0usize..10) {
        let mut bar: Sidebar<'_, Infallible> =
            Sidebar::new(PanelSettings::default(), || Ok(()));
        for _ in 0..toggles {
            bar.toggle();
        }
        bar.advance_to(Duration::from_secs(5));
        let state = bar.state();
        prop_assert_eq!(state.top_visible(), state.opened());
        prop_assert_eq!(state.bottom_visible(), state.opened());
        prop_assert_eq!(state.pending_timers(), 0);
    }
}
