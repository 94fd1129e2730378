//! Edge case and boundary condition tests
//!
//! Unusual fragments, missing content, and rapid interaction sequences
//! whose deferred settles overlap.

use folio_core::{
    materialize, resolve, FolioError, NavState, PanelId, ProjectRecord, Synchronizer, Transition,
    ViewController,
};

fn single_project() -> Vec<ProjectRecord> {
    vec![ProjectRecord {
        id: "p1".to_string(),
        title: "Only".to_string(),
        summary: String::new(),
        body: String::new(),
    }]
}

fn settle(view: &mut ViewController, transition: Transition) {
    let mut queue = transition.deferred;
    while !queue.is_empty() {
        for task in std::mem::take(&mut queue) {
            if let Some(chained) = view.apply(&task) {
                queue.extend(chained.deferred);
            }
        }
    }
}

// ============================================================================
// Missing content
// ============================================================================

#[test]
fn missing_project_leaves_state_unchanged() {
    let source = single_project();
    let mut view = ViewController::new();

    let err = materialize(&source, "nope").unwrap_err();
    assert!(matches!(err, FolioError::ProjectNotFound(_)));

    // Resolution of a dead deep link is a logged no-op.
    let transition = resolve(
        &mut view,
        &source,
        &NavState::ProjectDetail("nope".to_string()),
        false,
    );
    assert!(transition.fragment.is_none());
    settle(&mut view, transition);

    assert!(view.state().detail.is_none());
    assert!(view.state().background_visible);
    assert!(!view.state().any_open());
}

// ============================================================================
// Unrecognized fragments
// ============================================================================

#[test]
fn unknown_fragment_resolves_to_nothing() {
    let mut sync = Synchronizer::new();
    for fragment in ["gallery", "#project/", "projects/extra", "PROJECTS"] {
        match sync.fragment_changed(fragment) {
            folio_core::SyncDirective::External(nav) => assert_eq!(nav, None),
            other => panic!("unexpected directive: {other:?}"),
        }
    }
}

#[test]
fn unknown_fragment_on_back_still_closes_panels() {
    let mut view = ViewController::new();
    let opened = view.open(PanelId::About, true);
    settle(&mut view, opened);

    // History landed on something unparseable; reset still happens.
    let transition = view.close_all(false);
    settle(&mut view, transition);

    assert!(!view.state().any_open());
    assert!(view.state().background_visible);
}

// ============================================================================
// Overlapping deferred settles
// ============================================================================

#[test]
fn rapid_open_close_open_settles_on_last_state() {
    let mut view = ViewController::new();

    let first = view.open(PanelId::About, true);
    let closed = view.close(PanelId::About, true);
    let second = view.open(PanelId::Projects, true);

    // Timers fire in scheduling order well after the burst.
    settle(&mut view, first);
    settle(&mut view, closed);
    settle(&mut view, second);

    assert_eq!(view.state().current, Some(PanelId::Projects));
    assert!(view.state().shown);
    assert!(!view.state().background_visible);
}

#[test]
fn reopen_task_yields_when_something_else_opened() {
    let source = single_project();
    let mut view = ViewController::new();

    let opened = view.show_details(source[0].clone(), true);
    settle(&mut view, opened);

    // Back affordance schedules the list reopen...
    let back = view.close_details_to_list();
    // ...but the user opens Contact before the timer fires.
    let contact = view.open(PanelId::Contact, true);
    settle(&mut view, contact);
    settle(&mut view, back);

    // The reopen re-asserted nothing: Contact stays.
    assert_eq!(view.state().current, Some(PanelId::Contact));
    assert!(view.state().shown);
}

#[test]
fn detail_swap_during_retire_window() {
    let source = vec![
        ProjectRecord {
            id: "a".to_string(),
            title: "A".to_string(),
            summary: String::new(),
            body: String::new(),
        },
        ProjectRecord {
            id: "b".to_string(),
            title: "B".to_string(),
            summary: String::new(),
            body: String::new(),
        },
        ProjectRecord {
            id: "c".to_string(),
            title: "C".to_string(),
            summary: String::new(),
            body: String::new(),
        },
    ];
    let mut view = ViewController::new();

    // Three swaps before any removal timer fires.
    let first = view.show_details(source[0].clone(), true);
    let second = view.show_details(source[1].clone(), true);
    let third = view.show_details(source[2].clone(), true);

    // Only the newest retiring panel survives the burst window.
    assert_eq!(view.state().retiring.as_ref().unwrap().record.id, "b");
    assert_eq!(view.state().detail.as_ref().unwrap().record.id, "c");

    settle(&mut view, first);
    settle(&mut view, second);
    settle(&mut view, third);

    assert!(view.state().retiring.is_none());
    let detail = view.state().detail.as_ref().unwrap();
    assert_eq!(detail.record.id, "c");
    assert!(detail.shown);
}

#[test]
fn close_all_is_safe_when_nothing_open() {
    let mut view = ViewController::new();
    let transition = view.close_all(true);
    settle(&mut view, transition);
    assert!(view.state().background_visible);
    assert!(!view.state().any_open());
}
