//! End-to-end flows through the controller and synchronizer
//!
//! These tests drive the same sequences the shell does: user clicks,
//! launch-time deep links, and back/forward resolution, with the
//! deferred settle tasks applied the way the timers would.

use folio_core::{
    resolve, NavState, PanelId, ProjectRecord, SyncDirective, Synchronizer, Transition,
    ViewController, WriteMode,
};

fn projects() -> Vec<ProjectRecord> {
    ["p1", "p2"]
        .iter()
        .map(|id| ProjectRecord {
            id: (*id).to_string(),
            title: format!("Project {id}"),
            summary: "teaser".to_string(),
            body: "# Heading\nbody".to_string(),
        })
        .collect()
}

/// Apply every deferred task in scheduling order, chasing chained
/// transitions, the way the shell's timers eventually do.
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

#[test]
fn open_then_close_round_trips_fragment() {
    for panel in PanelId::ALL {
        let mut view = ViewController::new();

        let opened = view.open(panel, true);
        let write = opened.fragment.as_ref().expect("open writes fragment");
        assert_eq!(write.target.encode(), panel.as_key());
        assert_eq!(write.mode, WriteMode::Push);
        settle(&mut view, opened);

        let closed = view.close(panel, true);
        let write = closed.fragment.as_ref().expect("close writes fragment");
        assert_eq!(write.target.encode(), "");
        settle(&mut view, closed);
        assert!(view.state().background_visible);
    }
}

#[test]
fn deep_link_to_detail_never_shows_projects_list() {
    let source = projects();
    let mut view = ViewController::new();

    let transition = resolve(
        &mut view,
        &source,
        &NavState::ProjectDetail("p1".to_string()),
        false,
    );
    // Launch-time resolution must not write the fragment back.
    assert!(transition.fragment.is_none());
    assert_eq!(view.state().current, None);

    settle(&mut view, transition);
    assert_eq!(view.state().current, None);
    let detail = view.state().detail.as_ref().expect("detail open");
    assert!(detail.shown);
    assert_eq!(detail.record.id, "p1");
    assert!(!view.state().background_visible);
}

#[test]
fn repeated_show_details_keeps_single_panel() {
    let source = projects();
    let mut view = ViewController::new();

    let first = view.show_details(source.get_record("p1"), true);
    settle(&mut view, first);
    let second = view.show_details(source.get_record("p1"), true);
    settle(&mut view, second);

    assert_eq!(view.state().detail.as_ref().unwrap().record.id, "p1");
    assert!(view.state().retiring.is_none());
}

#[test]
fn switching_details_retires_previous_panel() {
    let source = projects();
    let mut view = ViewController::new();

    let first = view.show_details(source.get_record("p1"), true);
    settle(&mut view, first);

    let second = view.show_details(source.get_record("p2"), true);
    // Before the close transition elapses both exist, one retiring.
    assert_eq!(view.state().detail.as_ref().unwrap().record.id, "p2");
    assert_eq!(view.state().retiring.as_ref().unwrap().record.id, "p1");

    settle(&mut view, second);
    assert_eq!(view.state().detail.as_ref().unwrap().record.id, "p2");
    assert!(view.state().retiring.is_none());
}

#[test]
fn escape_from_detail_lands_on_projects_list() {
    let source = projects();
    let mut view = ViewController::new();
    let mut sync = Synchronizer::new();

    let opened = view.show_details(source.get_record("p1"), true);
    sync.note_write(&opened.fragment.as_ref().unwrap().target);
    settle(&mut view, opened);

    // Escape: back affordance.
    let back = view.close_details_to_list();
    let write = back.fragment.as_ref().expect("swap rewrites fragment");
    assert_eq!(write.target, NavState::Panel(PanelId::Projects));
    assert_eq!(write.mode, WriteMode::Replace);
    sync.note_write(&write.target);
    settle(&mut view, back);

    assert_eq!(view.state().current, Some(PanelId::Projects));
    assert!(view.state().shown);
    assert!(view.state().detail.is_none());
    assert!(!view.state().background_visible);

    // The route echo of our own replace is ignored.
    assert_eq!(sync.fragment_changed("projects"), SyncDirective::SelfWrite);
}

#[test]
fn back_forward_resets_and_resolves() {
    let source = projects();
    let mut view = ViewController::new();
    let mut sync = Synchronizer::new();

    let opened = view.open(PanelId::About, true);
    sync.note_write(&opened.fragment.as_ref().unwrap().target);
    settle(&mut view, opened);
    assert_eq!(sync.fragment_changed("about"), SyncDirective::SelfWrite);

    // History moves to `projects` from outside (back/forward).
    let directive = sync.fragment_changed("projects");
    let SyncDirective::External(Some(nav)) = directive else {
        panic!("expected external directive");
    };
    let transition = resolve(&mut view, &source, &nav, true);
    assert!(transition.fragment.is_none());
    settle(&mut view, transition);

    assert_eq!(view.state().current, Some(PanelId::Projects));
    assert!(view.state().shown);
    assert!(!view.state().background_visible);
}

#[test]
fn back_to_home_restores_hero() {
    let source = projects();
    let mut view = ViewController::new();
    let mut sync = Synchronizer::new();

    let opened = view.open(PanelId::Contact, true);
    sync.note_write(&opened.fragment.as_ref().unwrap().target);
    settle(&mut view, opened);
    let _ = sync.fragment_changed("contact");

    let SyncDirective::External(Some(nav)) = sync.fragment_changed("") else {
        panic!("expected external home directive");
    };
    let transition = resolve(&mut view, &source, &nav, true);
    settle(&mut view, transition);

    assert!(!view.state().any_open());
    assert!(view.state().background_visible);
}

trait GetRecord {
    fn get_record(&self, id: &str) -> ProjectRecord;
}

impl GetRecord for Vec<ProjectRecord> {
    fn get_record(&self, id: &str) -> ProjectRecord {
        self.iter().find(|p| p.id == id).cloned().expect("known id")
    }
}
