//! Input Field Components
//!
//! Text inputs and textareas for the contact form. Labels sit above the
//! field; validation problems render as a line of ochre text under it.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Validation problem shown under the field
    #[props(default)]
    pub problem: Option<String>,
    /// Stable id for label association
    pub id: String,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "contact-name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let field_class = if props.problem.is_some() {
        "input-field invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "{field_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(problem) = &props.problem {
                p { class: "field-problem", "{problem}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 6)]
    pub rows: u32,
    /// Validation problem shown under the field
    #[props(default)]
    pub problem: Option<String>,
    /// Stable id for label association
    pub id: String,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let field_class = if props.problem.is_some() {
        "input-field textarea invalid"
    } else {
        "input-field textarea"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "{field_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(problem) = &props.problem {
                p { class: "field-problem", "{problem}" }
            }
        }
    }
}
