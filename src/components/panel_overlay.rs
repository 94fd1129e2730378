//! Overlay panel chrome.
//!
//! Shared shell for every static panel: full-bleed backdrop, centered
//! content column, title row with a close button. Clicking the backdrop
//! closes; clicks inside the column stay inside.

use dioxus::prelude::*;
use folio_ui::CloseButton;

#[derive(Clone, PartialEq, Props)]
pub struct PanelOverlayProps {
    /// Heading shown in the panel chrome
    pub title: String,
    /// Stable CSS hook (`about`, `projects`, `contact`)
    pub name: String,
    /// Whether the panel has passed its show settle
    pub active: bool,
    /// Callback when the backdrop or close button is clicked
    pub on_close: EventHandler<()>,
    /// Panel body
    pub children: Element,
}

/// Full-screen overlay panel. Always present in the tree; `active`
/// drives the CSS cross-fade.
#[component]
pub fn PanelOverlay(props: PanelOverlayProps) -> Element {
    let on_close = props.on_close;
    let class = if props.active {
        format!("panel-overlay panel-{} active", props.name)
    } else {
        format!("panel-overlay panel-{}", props.name)
    };

    rsx! {
        section {
            class: "{class}",
            "aria-hidden": if props.active { "false" } else { "true" },
            onclick: move |_| on_close.call(()),

            div {
                class: "panel-content",
                onclick: move |e| e.stop_propagation(),

                header { class: "panel-header",
                    h2 { class: "panel-title", "{props.title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "panel-body", {props.children} }
            }
        }
    }
}
