//! View state context and transition plumbing.
//!
//! The controller, synchronizer, and content library are provided at
//! the App root; components reach them through the hooks below. Every
//! interaction funnels through [`run_transition`], which lands the
//! fragment write in the router and puts the deferred settle tasks on
//! timers.

use dioxus::prelude::*;
use folio_core::{Synchronizer, Transition, ViewController, WriteMode};

use crate::app::Route;
use crate::content::Library;

/// Hook to access the view controller from context.
pub fn use_view() -> Signal<ViewController> {
    use_context::<Signal<ViewController>>()
}

/// Hook to access the navigation synchronizer from context.
pub fn use_synchronizer() -> Signal<Synchronizer> {
    use_context::<Signal<Synchronizer>>()
}

/// Hook to access the content library from context.
pub fn use_library() -> Signal<Library> {
    use_context::<Signal<Library>>()
}

/// Execute a transition the controller just returned.
///
/// The fragment write (if any) is recorded with the synchronizer first,
/// so the route change it echoes back is not resolved a second time,
/// then pushed or replaced into the router. Deferred tasks sleep out
/// their settle delay and re-enter the controller; a chained transition
/// (the list reopening behind a closed detail) schedules itself the
/// same way.
pub fn run_transition(
    mut view: Signal<ViewController>,
    mut sync: Signal<Synchronizer>,
    navigator: Navigator,
    transition: Transition,
) {
    let Transition { deferred, fragment } = transition;

    if let Some(write) = fragment {
        sync.write().note_write(&write.target);
        let route = Route::from_nav(&write.target);
        match write.mode {
            WriteMode::Push => {
                navigator.push(route);
            }
            WriteMode::Replace => {
                navigator.replace(route);
            }
        }
    }

    for task in deferred {
        spawn(async move {
            tokio::time::sleep(task.delay).await;
            let chained = view.write().apply(&task);
            if let Some(chained) = chained {
                run_transition(view, sync, navigator, chained);
            }
        });
    }
}
