//! Navigation header.
//!
//! Brand mark on the left, section links on the right. Conceals along
//! with the hero while a panel is up.

use dioxus::prelude::*;
use folio_core::PanelId;
use folio_ui::{Button, ButtonVariant};

use crate::context::use_library;

#[derive(Clone, PartialEq, Props)]
pub struct NavHeaderProps {
    /// Hidden while any panel is open
    pub concealed: bool,
    /// Panel currently open, for the active link state
    pub current: Option<PanelId>,
    /// Callback when a section link is clicked
    pub on_open: EventHandler<PanelId>,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let library = use_library();
    let brand = library.read().profile().name.clone();
    let on_open = props.on_open;

    let class = if props.concealed {
        "nav-header concealed"
    } else {
        "nav-header"
    };

    rsx! {
        header { class: "{class}", "aria-hidden": if props.concealed { "true" } else { "false" },
            div { class: "nav-inner",
                span { class: "nav-brand", "{brand}" }

                nav { class: "nav-links",
                    for panel in PanelId::ALL {
                        Button {
                            variant: ButtonVariant::Nav,
                            class: if props.current == Some(panel) {
                                Some("active".to_string())
                            } else {
                                None
                            },
                            onclick: move |_| on_open.call(panel),
                            "{panel.title()}"
                        }
                    }
                }
            }
        }
    }
}
