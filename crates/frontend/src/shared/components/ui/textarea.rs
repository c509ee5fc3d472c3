use leptos::prelude::*;

use super::field_error::FieldError;

/// Textarea component with label and validation message
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Validation message for this field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    dir: MaybeProp<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_dir = move || dir.get().unwrap_or_else(|| "auto".to_string());
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                dir=textarea_dir
                rows=textarea_rows
                prop:value=move || value.get()
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
