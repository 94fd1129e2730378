//! Project Card Component
//!
//! One project in the list panel. Title and button both open the
//! detail view; handlers are bound declaratively, once per card, so
//! re-renders never stack duplicates.

use dioxus::prelude::*;
use folio_core::ProjectRecord;

use crate::components::{Button, ButtonVariant};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    /// The record this card presents
    pub record: ProjectRecord,
    /// Callback with the project id when the card is activated
    pub on_select: EventHandler<String>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    // Swallow the second click of a double-click while the detail
    // panel is still settling in.
    let mut opening = use_signal(|| false);

    let record = props.record.clone();
    let on_select = props.on_select;

    let mut activate = move |id: String| {
        if opening() {
            return;
        }
        opening.set(true);
        on_select.call(id);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(400)).await;
            opening.set(false);
        });
    };

    let title_id = record.id.clone();
    let button_id = record.id.clone();

    rsx! {
        article { class: "project-card", "data-project": "{record.id}",
            h3 {
                class: "card-title",
                onclick: move |_| activate(title_id.clone()),
                "{record.title}"
            }
            p { class: "card-summary", "{record.summary}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| activate(button_id.clone()),
                "View details"
            }
        }
    }
}
