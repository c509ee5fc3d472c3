//! Sortable table header bound to a list's query state
//!
//! ```ignore
//! <SortableHeaderCell
//!     label=Signal::derive(move || Msg::Name.text(locale.get()).to_string())
//!     sort_field="orderIndex"
//!     state=collection.state
//! />
//! ```

use leptos::prelude::*;
use thaw::TableHeaderCell;

use crate::shared::list_state::ListState;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Header cell that toggles the list sort on click
///
/// The same field flips the order; another field starts ascending.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: Signal<String>,
    /// Backend sort key (`sortBy`)
    sort_field: &'static str,
    state: ListState,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort = Memo::new(move |_| state.sort());

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                on:click=move |_| state.toggle_sort(sort_field)
            >
                {label}
                <span class=move || sort.with(|(field, _)| get_sort_class(field.as_deref(), sort_field))>
                    {move || sort.with(|(field, order)| get_sort_indicator(field.as_deref(), sort_field, *order))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
