use leptos::prelude::*;

use super::field_error::FieldError;

/// Input component with label and validation message
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "url", "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Validation message for this field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Text direction of the value (translations are edited per locale)
    #[prop(optional, into)]
    dir: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let input_dir = move || dir.get().unwrap_or_else(|| "auto".to_string());

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                dir=input_dir
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                required=required
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <FieldError error=error />
        </div>
    }
}
