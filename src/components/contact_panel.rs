//! Contact panel.
//!
//! A small form that never talks to a server: on submit it builds a
//! `mailto:` URI and hands the visitor to their own mail client.

use dioxus::prelude::*;
use folio_core::{ContactMessage, PanelId};
use folio_ui::{Button, ButtonVariant, Input, TextArea};

use crate::components::PanelOverlay;
use crate::context::use_library;

#[component]
pub fn ContactPanel(active: bool, on_close: EventHandler<PanelId>) -> Element {
    let library = use_library();
    let owner_email = library.read().profile().email.clone();
    let footer_email = owner_email.clone();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut problem = use_signal(|| Option::<String>::None);
    let mut handed_off = use_signal(|| false);

    let mut submit = move |_: ()| {
        let draft = ContactMessage {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            subject: subject().trim().to_string(),
            message: message().trim().to_string(),
        };

        if draft.name.is_empty() || draft.message.is_empty() {
            problem.set(Some("Please fill in your name and a message.".to_string()));
            return;
        }
        if !draft.email.contains('@') {
            problem.set(Some("That email address does not look right.".to_string()));
            return;
        }
        problem.set(None);

        let uri = draft.mailto_uri(&owner_email);
        match open::that(&uri) {
            Ok(()) => {
                tracing::info!("contact hand-off to mail client");
                handed_off.set(true);
            }
            Err(error) => {
                tracing::error!(%error, "failed to open mail client");
                problem.set(Some(
                    "Could not open your mail client. The address is in the footer.".to_string(),
                ));
            }
        }
    };

    rsx! {
        PanelOverlay {
            title: PanelId::Contact.title().to_string(),
            name: PanelId::Contact.as_key().to_string(),
            active,
            on_close: move |_| on_close.call(PanelId::Contact),

            form {
                class: "contact-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(());
                },

                Input {
                    id: "contact-name".to_string(),
                    label: "Name".to_string(),
                    value: name(),
                    oninput: move |v| name.set(v),
                }
                Input {
                    id: "contact-email".to_string(),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    value: email(),
                    oninput: move |v| email.set(v),
                }
                Input {
                    id: "contact-subject".to_string(),
                    label: "Subject".to_string(),
                    placeholder: "(optional)".to_string(),
                    value: subject(),
                    oninput: move |v| subject.set(v),
                }
                TextArea {
                    id: "contact-message".to_string(),
                    label: "Message".to_string(),
                    value: message(),
                    oninput: move |v| message.set(v),
                }

                if let Some(problem) = problem() {
                    p { class: "field-problem form-problem", "{problem}" }
                }
                if handed_off() {
                    p { class: "form-confirmation",
                        "Your mail client should have opened with the message ready to send."
                    }
                }

                div { class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        "Send"
                    }
                }
            }

            p { class: "contact-direct",
                "Or write directly: "
                span { class: "contact-email", "{footer_email}" }
            }
        }
    }
}
