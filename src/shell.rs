//! The single page of the site.
//!
//! Renders the hero underneath the overlay panels and owns all wiring:
//! nav clicks, card clicks, Escape, history shortcuts, the entrance
//! reveal, and the route-change effect that keeps the address and the
//! visible panel consistent.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{NavState, PanelId, SyncDirective, Transition};

use crate::app::Route;
use crate::components::{
    AboutPanel, ContactPanel, Hero, NavHeader, ProjectDetailPanel, ProjectsPanel,
};
use crate::context::{run_transition, use_library, use_synchronizer, use_view};

/// Wait before the hero reveal classes flip on, so the entrance
/// transition actually plays instead of landing pre-settled.
const REVEAL_DELAY: Duration = Duration::from_millis(120);

/// Wait before resolving a launch-time start route, letting the reveal
/// kick off first.
const LAUNCH_SETTLE: Duration = Duration::from_millis(80);

/// The portfolio shell: hero page plus overlay panels.
#[component]
pub fn Shell(segments: Vec<String>) -> Element {
    let mut view = use_view();
    let mut sync = use_synchronizer();
    let library = use_library();
    let navigator = use_navigator();
    let mut revealed = use_signal(|| false);

    let fragment = segments.join("/");

    // Mount: kick off the entrance reveal, then resolve a start route
    // the way a deep-linked page load would.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(REVEAL_DELAY).await;
            revealed.set(true);
        });

        if let Some(start) = crate::start_route() {
            match NavState::decode(&start) {
                Some(NavState::Home) => {}
                Some(nav) => {
                    spawn(async move {
                        tokio::time::sleep(LAUNCH_SETTLE).await;
                        let transition = {
                            let lib = library.read();
                            let mut controller = view.write();
                            folio_core::resolve(&mut *controller, &*lib, &nav, false)
                        };
                        // Mirror the resolved state into the address
                        // without adding a history entry.
                        sync.write().note_write(&nav);
                        navigator.replace(Route::from_nav(&nav));
                        run_transition(view, sync, navigator, transition);
                    });
                }
                None => {
                    tracing::warn!(route = %start, "unrecognized start route ignored");
                }
            }
        }
    });

    // Route changes: our own writes echo back and are ignored; anything
    // else (back/forward, external navigation) is a reset-and-resolve.
    use_effect(use_reactive(
        (&fragment,),
        move |(fragment,)| {
            let directive = sync.write().fragment_changed(&fragment);
            match directive {
                SyncDirective::SelfWrite => {}
                SyncDirective::External(nav) => {
                    let transition = {
                        let lib = library.read();
                        let mut controller = view.write();
                        match nav {
                            Some(nav) => folio_core::resolve(&mut *controller, &*lib, &nav, true),
                            None => controller.close_all(false),
                        }
                    };
                    run_transition(view, sync, navigator, transition);
                }
            }
        },
    ));

    let open_panel = move |panel: PanelId| {
        let transition = view.write().open(panel, true);
        run_transition(view, sync, navigator, transition);
    };

    let close_panel = move |panel: PanelId| {
        let transition = view.write().close(panel, true);
        run_transition(view, sync, navigator, transition);
    };

    let select_project = move |id: String| {
        let transition = {
            let lib = library.read();
            match folio_core::materialize(&*lib, &id) {
                Ok(record) => view.write().show_details(record, true),
                Err(error) => {
                    tracing::warn!(%error, "project selection ignored");
                    return;
                }
            }
        };
        run_transition(view, sync, navigator, transition);
    };

    let detail_back = move |_: ()| {
        let transition = view.write().close_details_to_list();
        run_transition(view, sync, navigator, transition);
    };

    let detail_dismiss = move |_: ()| {
        let transition = view.write().close_details_to_home();
        run_transition(view, sync, navigator, transition);
    };

    // Escape steps back one level: detail -> list, anything else -> home.
    let handle_key = move |event: KeyboardEvent| match event.key() {
        Key::Escape => {
            let transition = {
                let mut controller = view.write();
                if controller.state().detail.is_some() {
                    controller.close_details_to_list()
                } else if controller.state().any_open() {
                    controller.close_all(true)
                } else {
                    Transition::default()
                }
            };
            run_transition(view, sync, navigator, transition);
        }
        Key::ArrowLeft if event.modifiers().alt() => {
            navigator.go_back();
        }
        Key::ArrowRight if event.modifiers().alt() => {
            navigator.go_forward();
        }
        _ => {}
    };

    let state = view.read().state().clone();
    let detail = state.detail.clone();
    let retiring = state.retiring.clone();
    let concealed = !state.background_visible;

    rsx! {
        div {
            class: if state.scroll_locked() { "shell locked" } else { "shell" },
            tabindex: "0",
            autofocus: true,
            onkeydown: handle_key,

            NavHeader {
                concealed,
                current: state.current,
                on_open: open_panel,
            }

            Hero {
                revealed: revealed(),
                concealed,
                on_open: open_panel,
            }

            AboutPanel {
                active: state.current == Some(PanelId::About) && state.shown,
                on_close: close_panel,
            }
            ProjectsPanel {
                active: state.current == Some(PanelId::Projects) && state.shown,
                on_close: close_panel,
                on_select: select_project,
            }
            ContactPanel {
                active: state.current == Some(PanelId::Contact) && state.shown,
                on_close: close_panel,
            }

            if let Some(panel) = detail {
                ProjectDetailPanel {
                    panel,
                    closing: false,
                    on_back: detail_back,
                    on_dismiss: detail_dismiss,
                }
            }
            if let Some(panel) = retiring {
                ProjectDetailPanel {
                    panel,
                    closing: true,
                    on_back: detail_back,
                    on_dismiss: detail_dismiss,
                }
            }
        }
    }
}
