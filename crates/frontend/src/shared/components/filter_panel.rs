use contracts::shared::locale::Locale;
use leptos::prelude::*;

use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};

/// FilterPanel component - collapsible panel holding the entity filters
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    locale: Signal<Locale>,

    /// Clears search and every entity filter
    on_clear: Callback<()>,

    /// Filter content (form fields)
    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon(IconName::ChevronRight)}
                    </span>
                    <span class="filter-panel__title">{move || Msg::Filters.text(locale.get())}</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--ghost button--small"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_clear.run(())
                    >
                        {icon(IconName::X)}
                        {move || Msg::ClearFilters.text(locale.get())}
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}
