//! Projects list panel.

use dioxus::prelude::*;
use folio_core::{PanelId, ProjectSource};
use folio_ui::ProjectCard;

use crate::components::PanelOverlay;
use crate::context::use_library;

#[component]
pub fn ProjectsPanel(
    active: bool,
    on_close: EventHandler<PanelId>,
    on_select: EventHandler<String>,
) -> Element {
    let library = use_library();
    let records = library.read().all();

    rsx! {
        PanelOverlay {
            title: PanelId::Projects.title().to_string(),
            name: PanelId::Projects.as_key().to_string(),
            active,
            on_close: move |_| on_close.call(PanelId::Projects),

            div { class: "project-grid",
                for record in records {
                    ProjectCard {
                        key: "{record.id}",
                        record,
                        on_select,
                    }
                }
            }
        }
    }
}
