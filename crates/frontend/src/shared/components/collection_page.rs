//! Admin list page written once for every entity: header, search and
//! filters, the data table, pagination and row actions.

use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::config::app_config;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::RemoteCollection;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{DataTable, RowAction};
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::EditorState;
use crate::shared::mutation::{dispatch, invalidate_entity, Mutation};
use crate::shared::notifications::use_notifications;
use crate::shared::projection::ColumnDef;
use crate::shared::services::use_services;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn CollectionPage<E>(
    collection: RemoteCollection<E>,
    columns: Vec<ColumnDef<E>>,
    /// Create / edit modal state; lists without one are read-only
    #[prop(optional)]
    editor: Option<EditorState>,
    /// Actions shown between edit and delete
    #[prop(optional)]
    extra_actions: Vec<RowAction<E>>,
    /// Entity filter selects
    children: ChildrenFn,
) -> impl IntoView
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let services = use_services();
    let notifier = use_notifications();
    let ctx = use_global_context();
    let locale = ctx.locale_signal();
    let state = collection.state;
    let config = &app_config().ui;
    let filters_expanded = RwSignal::new(false);

    let refresh_cache = services.cache.clone();
    let refresh = move || {
        invalidate_entity(&refresh_cache, E::KIND, None);
        collection.reload();
    };

    let delete_row = Callback::new(move |row: E| {
        let locale = locale.get_untracked();
        let message = format!(
            "{}\n{}",
            row.display_name(locale),
            Msg::ConfirmDelete.text(locale)
        );
        if !confirm(&message) {
            return;
        }
        let services = services.clone();
        let mutation = Mutation::delete(E::KIND, row.id());
        spawn_local(async move {
            let client = services.client();
            if dispatch(&client, &services.cache, &notifier, mutation).await.is_ok() {
                collection.reload();
            }
        });
    });

    let mut actions = Vec::new();
    if let Some(editor) = editor {
        actions.push(RowAction::new(
            Msg::Edit,
            IconName::Edit,
            Callback::new(move |row: E| editor.open(row.id())),
        ));
    }
    actions.extend(extra_actions);
    actions.push(RowAction::new(Msg::Delete, IconName::Trash, delete_row).danger());

    let title = Signal::derive(move || E::list_name(locale.get()).to_string());
    let subtitle = Signal::derive(move || {
        let total = collection.page.with(|p| p.meta.total);
        Some(format!("{}: {}", Msg::Total.text(locale.get()), total))
    });
    let meta = collection.meta();
    let page_size_options = config.page_size_options.clone();
    let debounce_ms = config.search_debounce_ms;

    view! {
        <div class="page" id=format!("{}--list", E::KIND.code())>
            <PageHeader title=title subtitle=subtitle>
                {editor.map(|editor| view! {
                    <button class="button button--primary" on:click=move |_| editor.open_new()>
                        {icon(IconName::Plus)}
                        {move || Msg::New.text(locale.get())}
                    </button>
                })}
                <button
                    class="button button--secondary"
                    disabled=move || collection.loading.get()
                    on:click=move |_| refresh()
                >
                    {icon(IconName::Refresh)}
                    {move || Msg::Refresh.text(locale.get())}
                </button>
            </PageHeader>

            <div class="page__content">
                {move || collection.error.get().map(|e| view! {
                    <div class="alert alert--error">
                        {icon(IconName::AlertCircle)}
                        <span>{e}</span>
                    </div>
                })}

                <div class="list-toolbar">
                    <SearchInput
                        value=Signal::derive(move || state.search())
                        on_change=Callback::new(move |text: String| state.set_search(text))
                        placeholder=Signal::derive(move || Msg::Search.text(locale.get()).to_string())
                        debounce_ms=debounce_ms
                    />
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || state.active_filter_count())
                    locale=locale
                    on_clear=Callback::new(move |_| state.clear_filters())
                >
                    {children()}
                </FilterPanel>

                <DataTable collection=collection columns=columns actions=actions locale=locale />

                <PaginationControls
                    meta=meta
                    locale=locale
                    on_page_change=Callback::new(move |page: u32| state.set_page(page))
                    on_page_size_change=Callback::new(move |raw: String| state.set_limit_text(&raw))
                    page_size_options=page_size_options
                />
            </div>
        </div>
    }
}
