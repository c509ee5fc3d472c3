use contracts::shared::locale::Locale;
use leptos::prelude::*;

use crate::shared::components::ui::Select;
use crate::shared::i18n::Msg;
use crate::shared::list_state::ListState;

/// Entity filter bound to one `ListQuery` filter key; the empty option
/// ("All") removes the filter
#[component]
pub fn FilterSelect(
    state: ListState,
    /// Wire name of the filter, e.g. `isActive`
    filter_key: &'static str,
    label: Msg,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] locale: Signal<Locale>,
) -> impl IntoView {
    let all_options = Signal::derive(move || {
        let mut all = vec![(String::new(), Msg::All.text(locale.get()).to_string())];
        all.extend(options.get());
        all
    });

    view! {
        <div class="filter-panel__field">
            <Select
                label=Signal::derive(move || Some(label.text(locale.get()).to_string()))
                value=Signal::derive(move || state.filter_text(filter_key))
                options=all_options
                on_change=Callback::new(move |raw: String| state.set_filter_text(filter_key, &raw))
            />
        </div>
    }
}

/// `true` / `false` options for a boolean filter
pub fn bool_options(yes: Msg, no: Msg, locale: Locale) -> Vec<(String, String)> {
    vec![
        ("true".to_string(), yes.text(locale).to_string()),
        ("false".to_string(), no.text(locale).to_string()),
    ]
}
