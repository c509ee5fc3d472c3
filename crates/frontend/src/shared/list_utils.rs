/// Helpers for list pages: debounced search input and sort indicators
use contracts::shared::query::SortOrder;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::{icon, IconName};

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current search text (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(into)]
    placeholder: Signal<String>,
    /// Debounce delay
    #[prop(optional, default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    // Local input state (before debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                debounce_ms as i32,
            )
            .ok();
        closure.forget();
        debounce_timeout.set_value(timeout_id);
    };

    // Clearing filters from outside empties the box too
    Effect::new(move |_| {
        let external = value.get();
        if external.is_empty() {
            input_value.set(external);
        }
    });

    let clear_filter = move |_| {
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=move || !value.get().trim().is_empty()>
            <span class="search-input__icon">{icon(IconName::Search)}</span>
            <input
                type="search"
                class="search-input__field"
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter>
                    {icon(IconName::X)}
                </button>
            })}
        </div>
    }
}

/// Sort indicator for a header
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, order: SortOrder) -> &'static str {
    if current_field == Some(field) {
        match order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: Option<&str>, field: &str) -> &'static str {
    if current_field == Some(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
