//! Hero page content.
//!
//! The background everything else overlays: name, tagline, and the
//! calls to action. Entrance classes flip on after the reveal delay so
//! the first paint animates in.

use dioxus::prelude::*;
use folio_core::PanelId;
use folio_ui::{Button, ButtonVariant};

use crate::context::use_library;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    /// Entrance animation has kicked in
    pub revealed: bool,
    /// Hidden and inert while a panel is up
    pub concealed: bool,
    /// Callback when a call-to-action is clicked
    pub on_open: EventHandler<PanelId>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let library = use_library();
    let profile = library.read().profile().clone();
    let on_open = props.on_open;

    let mut class = String::from("hero");
    if props.revealed {
        class.push_str(" revealed");
    }
    if props.concealed {
        class.push_str(" concealed");
    }

    rsx! {
        main { class: "{class}", "aria-hidden": if props.concealed { "true" } else { "false" },
            div { class: "hero-inner",
                p { class: "hero-eyebrow", "{profile.location}" }
                h1 { class: "hero-name", "{profile.name}" }
                p { class: "hero-tagline", "{profile.tagline}" }

                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_open.call(PanelId::Projects),
                        "View projects"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_open.call(PanelId::About),
                        "About me"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_open.call(PanelId::Contact),
                        "Get in touch"
                    }
                }
            }

            footer { class: "hero-footer",
                span { class: "hero-hint", "Esc closes \u{00B7} Alt+\u{2190}/\u{2192} history" }
            }
        }
    }
}
