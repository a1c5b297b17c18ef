//! Contact form fields

use leptos::prelude::*;

/// Single-line input with a label
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Value of the `name` attribute
    name: &'static str,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Field value, cleared by the form after submission
    value: RwSignal<String>,
) -> impl IntoView {
    let id = format!("contact-{}", name);

    view! {
        <div class="form-group">
            <label class="form-label" for=id.clone()>{label}</label>
            <input
                id=id
                name=name
                type=input_type
                class="form-input"
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Multi-line text area with a label
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Value of the `name` attribute
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Field value, cleared by the form after submission
    value: RwSignal<String>,
) -> impl IntoView {
    let id = format!("contact-{}", name);

    view! {
        <div class="form-group">
            <label class="form-label" for=id.clone()>{label}</label>
            <textarea
                id=id
                name=name
                class="form-input form-textarea"
                placeholder=placeholder
                rows=rows
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
