//! About panel.

use dioxus::prelude::*;
use folio_core::PanelId;

use crate::components::PanelOverlay;
use crate::context::use_library;

#[component]
pub fn AboutPanel(active: bool, on_close: EventHandler<PanelId>) -> Element {
    let library = use_library();
    let profile = library.read().profile().clone();

    rsx! {
        PanelOverlay {
            title: PanelId::About.title().to_string(),
            name: PanelId::About.as_key().to_string(),
            active,
            on_close: move |_| on_close.call(PanelId::About),

            div { class: "about-body",
                for paragraph in profile.bio.iter() {
                    p { class: "body-text", "{paragraph}" }
                }

                h3 { class: "subheading", "Toolbox" }
                ul { class: "skill-list",
                    for skill in profile.skills.iter() {
                        li { class: "skill-item", "{skill}" }
                    }
                }
            }
        }
    }
}
