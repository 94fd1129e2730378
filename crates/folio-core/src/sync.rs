//! Navigation State Synchronizer.
//!
//! Keeps the fragment and the visible panels consistent in both
//! directions. User-driven opens record the fragment they push so the
//! echoed route change is recognized and ignored; external changes
//! (launch deep links, back/forward) run through [`resolve`], a full
//! reset-and-resolve rather than an incremental diff. That trades a
//! little transition smoothness for correctness.

use crate::nav::NavState;
use crate::project::{materialize, ProjectSource};
use crate::view::{Transition, ViewController};

/// What to do with a route-change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncDirective {
    /// The change is the echo of a write this side just made.
    SelfWrite,
    /// The change came from outside. The decoded target is `None` for
    /// unrecognized fragments, which resolve to nothing.
    External(Option<NavState>),
}

/// Tracks the last fragment this side wrote.
#[derive(Debug, Default)]
pub struct Synchronizer {
    expected: Option<String>,
}

impl Synchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fragment the controller is about to write, so its echo
    /// is not resolved a second time.
    pub fn note_write(&mut self, target: &NavState) {
        self.expected = Some(target.encode());
    }

    /// Classify a fragment change.
    pub fn fragment_changed(&mut self, fragment: &str) -> SyncDirective {
        let key = crate::nav::normalize(fragment);
        if self.expected.as_deref() == Some(key) {
            self.expected = None;
            return SyncDirective::SelfWrite;
        }
        self.expected = None;
        SyncDirective::External(NavState::decode(key))
    }
}

/// Resolve a navigation state into panel-open calls.
///
/// Used at launch (`reset_first = false`) and for back/forward changes
/// (`reset_first = true`, closing everything before resolving the new
/// value). A project-detail target opens directly, bypassing the
/// projects list so it never flashes underneath. Nothing here writes
/// the fragment back; the address already holds the value being
/// resolved.
pub fn resolve(
    controller: &mut ViewController,
    source: &dyn ProjectSource,
    nav: &NavState,
    reset_first: bool,
) -> Transition {
    let mut transition = if reset_first {
        controller.close_all(false)
    } else {
        Transition::default()
    };
    match nav {
        NavState::Home => {}
        NavState::Panel(panel) => transition.extend(controller.open(*panel, false)),
        NavState::ProjectDetail(id) => match materialize(source, id) {
            Ok(record) => transition.extend(controller.show_details(record, false)),
            Err(error) => tracing::warn!(%error, "fragment resolution skipped"),
        },
    }
    transition
}
