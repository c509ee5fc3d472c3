use contracts::shared::locale::Locale;
use contracts::shared::pagination::PaginationMeta;
use leptos::prelude::*;

use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::shared::pagination::PaginationView;

/// PaginationControls component - first/prev/next/last, range text and page size
#[component]
pub fn PaginationControls(
    #[prop(into)] meta: Signal<PaginationMeta>,
    #[prop(into)] locale: Signal<Locale>,
    /// Called with the 1-based page to show
    on_page_change: Callback<u32>,
    /// Raw value of the page-size selector
    on_page_size_change: Callback<String>,
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let view_state = Memo::new(move |_| PaginationView::from_meta(&meta.get()));
    let t = move |msg: Msg| msg.text(locale.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !view_state.get().can_first
                title=move || t(Msg::FirstPage)
            >
                {icon(IconName::ChevronsLeft)}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(view_state.get_untracked().prev_page())
                disabled=move || !view_state.get().can_prev
                title=move || t(Msg::PrevPage)
            >
                {icon(IconName::ChevronLeft)}
            </button>
            <span class="pagination-info">
                {move || {
                    let v = view_state.get();
                    format!("{} {} {} {}", t(Msg::Showing), v.range, t(Msg::Of), v.total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(view_state.get_untracked().next_page())
                disabled=move || !view_state.get().can_next
                title=move || t(Msg::NextPage)
            >
                {icon(IconName::ChevronRight)}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(view_state.get_untracked().last_page())
                disabled=move || !view_state.get().can_last
                title=move || t(Msg::LastPage)
            >
                {icon(IconName::ChevronsRight)}
            </button>
            <label class="pagination-size">
                {move || t(Msg::PerPage)}
                <select
                    class="page-size-select"
                    on:change=move |ev| on_page_size_change.run(event_target_value(&ev))
                    prop:value=move || meta.get().limit.to_string()
                >
                    {page_size_options.into_iter().map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || meta.get().limit == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
