//! Project detail panel.
//!
//! The one dynamic panel: materialized when a card is selected, torn
//! down once its close transition ends. The back affordance returns to
//! the projects list; clicking the backdrop dismisses to home. While a
//! replaced instance fades out it renders a second time with
//! `closing`, inert except for the transition.

use dioxus::prelude::*;
use folio_core::DetailPanel;
use folio_ui::{Button, ButtonVariant};
use pulldown_cmark::{html, Options, Parser};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectDetailPanelProps {
    /// The materialized detail slot
    pub panel: DetailPanel,
    /// Rendering a retiring instance that is fading out
    pub closing: bool,
    /// Back affordance: return to the projects list
    pub on_back: EventHandler<()>,
    /// Backdrop click: dismiss to home
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn ProjectDetailPanel(props: ProjectDetailPanelProps) -> Element {
    let on_back = props.on_back;
    let on_dismiss = props.on_dismiss;

    let mut class = String::from("panel-overlay panel-detail");
    if props.panel.shown && !props.closing {
        class.push_str(" active");
    }
    if props.closing {
        class.push_str(" closing");
    }

    let body_html = render_markdown(&props.panel.record.body);

    rsx! {
        section {
            class: "{class}",
            "aria-hidden": if props.closing { "true" } else { "false" },
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "panel-content",
                onclick: move |e| e.stop_propagation(),

                header { class: "panel-header",
                    Button {
                        variant: ButtonVariant::Back,
                        onclick: move |_| on_back.call(()),
                        "\u{2190} All projects"
                    }
                    h2 { class: "panel-title", "{props.panel.record.title}" }
                }

                div {
                    class: "panel-body detail-body",
                    dangerous_inner_html: "{body_html}",
                }
            }
        }
    }
}

/// Convert a project's markdown body to HTML.
fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
