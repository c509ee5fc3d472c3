use leptos::prelude::*;

/// Validation message under a form control
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <div class="form__error" role="alert">{message}</div> })
    }
}
