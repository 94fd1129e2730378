//! Property-based tests for navigation encoding and the view state
//! machine
//!
//! Uses proptest to verify the fragment round-trip requirement and the
//! overlap-tolerance of deferred settles under arbitrary interaction
//! sequences.

use proptest::prelude::*;

use folio_core::{
    ContactMessage, DeferredTask, NavState, PanelId, ProjectRecord, ViewController,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn panel_strategy() -> impl Strategy<Value = PanelId> {
    prop::sample::select(PanelId::ALL.to_vec())
}

fn project_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9][a-z0-9_-]{0,23}").expect("valid regex")
}

fn nav_state_strategy() -> impl Strategy<Value = NavState> {
    prop_oneof![
        Just(NavState::Home),
        panel_strategy().prop_map(NavState::Panel),
        project_id_strategy().prop_map(NavState::ProjectDetail),
    ]
}

/// User-level operations the shell can issue against the controller.
#[derive(Debug, Clone)]
enum ShellOp {
    Open(PanelId),
    CloseCurrent,
    CloseAll,
    ShowDetails(u8),
    DetailBackToList,
    DetailDismiss,
}

fn shell_op_strategy() -> impl Strategy<Value = ShellOp> {
    prop_oneof![
        3 => panel_strategy().prop_map(ShellOp::Open),
        2 => Just(ShellOp::CloseCurrent),
        1 => Just(ShellOp::CloseAll),
        3 => (0..4u8).prop_map(ShellOp::ShowDetails),
        1 => Just(ShellOp::DetailBackToList),
        1 => Just(ShellOp::DetailDismiss),
    ]
}

/// An op plus how many already-queued timer tasks fire before the next
/// op arrives.
fn interaction_strategy(max_ops: usize) -> impl Strategy<Value = Vec<(ShellOp, u8)>> {
    prop::collection::vec((shell_op_strategy(), 0..6u8), 0..max_ops)
}

fn record(index: u8) -> ProjectRecord {
    ProjectRecord {
        id: format!("p{index}"),
        title: format!("Project {index}"),
        summary: String::new(),
        body: String::new(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// encode -> decode is the identity for every navigation state.
    #[test]
    fn fragment_encoding_round_trips(nav in nav_state_strategy()) {
        let encoded = nav.encode();
        prop_assert_eq!(NavState::decode(&encoded), Some(nav));
    }

    /// decode -> encode is a fixed point for anything that decodes.
    #[test]
    fn decoded_fragments_are_canonical(fragment in "[a-z/#]{0,16}") {
        if let Some(nav) = NavState::decode(&fragment) {
            let canonical = nav.encode();
            prop_assert_eq!(NavState::decode(&canonical), Some(nav));
        }
    }

    /// The mailto URI never leaks raw whitespace or query separators
    /// from user input.
    #[test]
    fn mailto_uri_is_fully_encoded(
        name in "[a-zA-Z ]{0,20}",
        email in "[a-z0-9@.]{0,20}",
        subject in ".{0,30}",
        body in ".{0,80}",
    ) {
        let message = ContactMessage {
            name,
            email,
            subject,
            message: body,
        };
        let uri = message.mailto_uri("owner@example.com");
        prop_assert!(uri.starts_with("mailto:owner@example.com?subject="));
        let query = uri.split_once('?').unwrap().1;
        prop_assert!(!query.contains(' '));
        prop_assert!(!query.contains('\n'));
        // Exactly the two parameters we wrote.
        prop_assert_eq!(query.matches('&').count(), 1);
        prop_assert_eq!(query.matches('=').count(), 2);
    }

    /// Whatever the interleaving of user actions and timer firings, the
    /// fully settled view obeys the visibility invariants.
    #[test]
    fn settled_view_obeys_invariants(interactions in interaction_strategy(24)) {
        let mut view = ViewController::new();
        let mut pending: Vec<DeferredTask> = Vec::new();

        let run = |view: &mut ViewController, pending: &mut Vec<DeferredTask>, n: usize| {
            for _ in 0..n {
                if pending.is_empty() {
                    break;
                }
                let task = pending.remove(0);
                if let Some(chained) = view.apply(&task) {
                    pending.extend(chained.deferred);
                }
            }
        };

        for (op, fired) in interactions {
            let transition = match op {
                ShellOp::Open(panel) => view.open(panel, true),
                ShellOp::CloseCurrent => {
                    let current = view.state().current;
                    match current {
                        Some(panel) => view.close(panel, true),
                        None => continue,
                    }
                }
                ShellOp::CloseAll => view.close_all(true),
                ShellOp::ShowDetails(index) => view.show_details(record(index), true),
                ShellOp::DetailBackToList => view.close_details_to_list(),
                ShellOp::DetailDismiss => view.close_details_to_home(),
            };
            // While anything is open the background must already be dark.
            if view.state().any_open() {
                prop_assert!(!view.state().background_visible);
            }
            pending.extend(transition.deferred);
            run(&mut view, &mut pending, fired as usize);
        }

        // Let every remaining timer fire.
        let remaining = pending.len() + 16;
        run(&mut view, &mut pending, remaining);
        prop_assert!(pending.is_empty());

        let state = view.state();
        prop_assert_eq!(state.background_visible, !state.any_open());
        prop_assert!(state.retiring.is_none());
        prop_assert_eq!(state.shown, state.current.is_some());
        if let Some(detail) = &state.detail {
            prop_assert!(detail.shown);
        }
        prop_assert_eq!(state.scroll_locked(), state.any_open());
    }
}
