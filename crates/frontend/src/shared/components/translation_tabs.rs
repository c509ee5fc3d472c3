use contracts::shared::locale::Locale;
use leptos::prelude::*;

/// One tab per supported locale; the form shows the fields of `active`
#[component]
pub fn TranslationTabs(
    active: RwSignal<Locale>,
    /// Highlights the strip when the translations failed validation
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="translation-tabs" class:translation-tabs--invalid=move || error.get().is_some()>
            {Locale::all()
                .into_iter()
                .map(|locale| view! {
                    <button
                        type="button"
                        class="translation-tabs__tab"
                        class:translation-tabs__tab--active=move || active.get() == locale
                        on:click=move |_| active.set(locale)
                    >
                        {locale.native_name()}
                    </button>
                })
                .collect_view()}
        </div>
        {move || error.get().map(|message| view! { <div class="form__error">{message}</div> })}
    }
}
