//! Table of one page of a remote collection, rendered from column
//! definitions. Row actions run callbacks with the row record.

use contracts::domain::common::Entity;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::collection::RemoteCollection;
use crate::shared::components::ui::Badge;
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::shared::projection::{project_row, Cell, ColumnDef};

pub struct RowAction<E: 'static> {
    pub label: Msg,
    pub icon: IconName,
    pub danger: bool,
    /// Hide the action for rows where it makes no sense
    pub visible: fn(&E) -> bool,
    pub run: Callback<E>,
}

impl<E: 'static> Clone for RowAction<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for RowAction<E> {}

fn always<E>(_: &E) -> bool {
    true
}

impl<E: 'static> RowAction<E> {
    pub fn new(label: Msg, icon: IconName, run: Callback<E>) -> Self {
        Self {
            label,
            icon,
            danger: false,
            visible: always::<E>,
            run,
        }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn visible_when(mut self, visible: fn(&E) -> bool) -> Self {
        self.visible = visible;
        self
    }
}

pub fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_any(),
        Cell::Muted(text) => view! { <span class="text-muted">{text}</span> }.into_any(),
        Cell::Badge { label, variant } => view! { <Badge variant=variant>{label}</Badge> }.into_any(),
        Cell::Date(text) => view! { <span class="table__cell--date">{text}</span> }.into_any(),
        Cell::Icon { name, label } => {
            let title = label.clone();
            view! {
                <span class="table__cell--icon" title=title>
                    {icon(name)}
                    <span class="text-muted">{label}</span>
                </span>
            }
            .into_any()
        }
        Cell::Link { href, label } => view! {
            <a class="table__link" href=href target="_blank" rel="noopener noreferrer">
                {label}
                {icon(IconName::ExternalLink)}
            </a>
        }
        .into_any(),
    }
}

#[component]
pub fn DataTable<E>(
    collection: RemoteCollection<E>,
    columns: Vec<ColumnDef<E>>,
    #[prop(optional)] actions: Vec<RowAction<E>>,
    #[prop(into)] locale: Signal<Locale>,
) -> impl IntoView
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let state = collection.state;
    let colspan = columns.len() + usize::from(!actions.is_empty());
    let has_actions = !actions.is_empty();

    let header_cells = columns
        .iter()
        .map(|col| {
            let header = col.header;
            let label = Signal::derive(move || header.text(locale.get()).to_string());
            match col.sort_field {
                Some(field) => view! {
                    <SortableHeaderCell label=label sort_field=field state=state />
                }
                .into_any(),
                None => view! { <TableHeaderCell min_width=80.0>{label}</TableHeaderCell> }.into_any(),
            }
        })
        .collect_view();

    let body_columns = columns.clone();
    let rows = move || {
        let locale = locale.get();
        if collection.is_empty() {
            let message = if collection.loading.get() {
                Msg::Loading
            } else {
                Msg::NoRecords
            };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=colspan.to_string()>
                        <div class="table__empty">{message.text(locale)}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        collection
            .rows()
            .into_iter()
            .map(|row| {
                let cells = project_row(&body_columns, &row, locale)
                    .into_iter()
                    .map(|cell| view! {
                        <TableCell>
                            <TableCellLayout truncate=true>{render_cell(cell)}</TableCellLayout>
                        </TableCell>
                    })
                    .collect_view();

                let buttons = actions
                    .iter()
                    .filter(|action| (action.visible)(&row))
                    .map(|action| {
                        let run = action.run;
                        let record = row.clone();
                        let class = if action.danger {
                            "button button--ghost button--small button--danger"
                        } else {
                            "button button--ghost button--small"
                        };
                        view! {
                            <button
                                class=class
                                title=action.label.text(locale)
                                on:click=move |_| run.run(record.clone())
                            >
                                {icon(action.icon)}
                            </button>
                        }
                    })
                    .collect_view();

                view! {
                    <TableRow>
                        {cells}
                        {has_actions.then(|| view! {
                            <TableCell>
                                <div class="table__actions">{buttons}</div>
                            </TableCell>
                        })}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-wrapper" class:table-wrapper--loading=move || collection.loading.get()>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header_cells}
                        {has_actions.then(|| view! {
                            <TableHeaderCell min_width=90.0>
                                {move || Msg::Actions.text(locale.get())}
                            </TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::projection::BadgeVariant;

    #[test]
    fn test_every_cell_kind_renders() {
        Owner::new().with(|| {
            let cells = vec![
                Cell::Text("Web".into()),
                Cell::Muted("-".into()),
                Cell::Badge { label: "Active".into(), variant: BadgeVariant::Success },
                Cell::Date("2024-01-05".into()),
                Cell::Icon { name: IconName::Code, label: "code".into() },
                Cell::Link { href: "https://example.com".into(), label: "example.com".into() },
            ];
            for cell in cells {
                let _ = render_cell(cell);
            }
        });
    }
}
