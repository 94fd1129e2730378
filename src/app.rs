use dioxus::prelude::*;
use folio_core::{NavState, Synchronizer, ViewController};

use crate::content::Library;
use crate::shell::Shell;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The whole site is one page; the route path mirrors which overlay
/// panel is open and doubles as the deep-link fragment:
///
/// - `/` - home, hero visible
/// - `/about` | `/projects` | `/contact` - a static section panel
/// - `/project/:id` - the detail panel for one project
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/:..segments")]
    Shell { segments: Vec<String> },
}

impl Route {
    /// The fragment encoding carried by this route.
    pub fn fragment(&self) -> String {
        let Route::Shell { segments } = self;
        segments.join("/")
    }

    /// Route whose path is a navigation state's canonical encoding.
    pub fn from_nav(nav: &NavState) -> Route {
        let encoded = nav.encode();
        let segments = if encoded.is_empty() {
            Vec::new()
        } else {
            encoded.split('/').map(str::to_string).collect()
        };
        Route::Shell { segments }
    }
}

/// Root application component.
///
/// Provides global styles, the view controller, the navigation
/// synchronizer, and the content library to the shell.
#[component]
pub fn App() -> Element {
    let view: Signal<ViewController> = use_signal(ViewController::new);
    let sync: Signal<Synchronizer> = use_signal(Synchronizer::new);
    let library: Signal<Library> = use_signal(Library::curated);

    use_context_provider(|| view);
    use_context_provider(|| sync);
    use_context_provider(|| library);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PanelId;

    #[test]
    fn route_fragment_round_trips_nav_states() {
        let states = [
            NavState::Home,
            NavState::Panel(PanelId::Projects),
            NavState::ProjectDetail("sol-tracker".to_string()),
        ];
        for nav in states {
            let route = Route::from_nav(&nav);
            assert_eq!(NavState::decode(&route.fragment()), Some(nav));
        }
    }
}
