use contracts::domain::a001_category::Category;
use contracts::domain::a006_project::Project;
use contracts::enums::{EntityKind, ProjectType};
use contracts::shared::query::SortOrder;
use leptos::prelude::*;

use super::details::ProjectDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::{load_options, option_pairs, options_query, RemoteCollection};
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::i18n::Msg;
use crate::shared::list_state::create_state;
use crate::shared::modal::{editor_title, EditorState, Modal};
use crate::shared::projection::{
    active_badge, date_cell, display_cell, featured_badge, link_cell, BadgeVariant, Cell, ColumnDef,
};
use crate::shared::services::use_services;

pub fn columns() -> Vec<ColumnDef<Project>> {
    vec![
        ColumnDef::new("title", Msg::Title, display_cell),
        ColumnDef::new("type", Msg::ProjectType, |p: &Project, l| Cell::Badge {
            label: p.project_type.display_name(l).to_string(),
            variant: BadgeVariant::Neutral,
        })
        .sortable("projectType"),
        ColumnDef::new("live", Msg::LiveUrl, |p: &Project, _| link_cell(p.live_url.as_deref())),
        ColumnDef::new("completed", Msg::CompletedAt, |p: &Project, _| {
            date_cell(p.completed_at.as_deref())
        })
        .sortable("completedAt"),
        ColumnDef::new("featured", Msg::Featured, |p: &Project, l| featured_badge(p.is_featured, l))
            .sortable("isFeatured"),
        ColumnDef::new("status", Msg::Status, |p: &Project, l| active_badge(p.is_active, l))
            .sortable("isActive"),
    ]
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let services = use_services();
    let locale = use_global_context().locale_signal();
    let state = create_state("orderIndex", SortOrder::Asc);
    let collection = RemoteCollection::<Project>::new(services.clone(), state, locale);
    let editor = EditorState::new();
    let categories = load_options::<Category>(services, options_query("orderIndex"));

    let on_saved = Callback::new(move |_| {
        editor.close();
        collection.reload();
    });
    let on_cancel = Callback::new(move |_| editor.close());

    view! {
        <CollectionPage collection=collection columns=columns() editor=editor>
            <FilterSelect
                state=state
                filter_key="categoryId"
                label=Msg::Category
                options=Signal::derive(move || categories.with(|c| option_pairs(c, locale.get())))
                locale=locale
            />
            <FilterSelect
                state=state
                filter_key="projectType"
                label=Msg::ProjectType
                options=Signal::derive(move || {
                    let locale = locale.get();
                    ProjectType::all()
                        .into_iter()
                        .map(|t| (t.code().to_string(), t.display_name(locale).to_string()))
                        .collect::<Vec<_>>()
                })
                locale=locale
            />
            <FilterSelect
                state=state
                filter_key="isFeatured"
                label=Msg::Featured
                options=Signal::derive(move || bool_options(Msg::Yes, Msg::No, locale.get()))
                locale=locale
            />
            <FilterSelect
                state=state
                filter_key="isActive"
                label=Msg::Status
                options=Signal::derive(move || bool_options(Msg::Active, Msg::Inactive, locale.get()))
                locale=locale
            />
        </CollectionPage>
        {move || editor.target().map(|target| {
            let title = editor_title(&target, EntityKind::Project, locale.get_untracked());
            view! {
                <Modal title=title on_close=on_cancel>
                    <ProjectDetails id=target.id() on_saved=on_saved on_cancel=on_cancel />
                </Modal>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::projection::project_row;
    use contracts::shared::locale::Locale;

    #[test]
    fn test_project_row_projection() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p1","slug":"shop","projectType":"mobile",
                "liveUrl":"https://shop.example.com/","completedAt":"2024-03-15",
                "translations":[{"locale":"en","title":"Shop app"}]}"#,
        )
        .unwrap();
        let cells = project_row(&columns(), &project, Locale::En);
        assert_eq!(cells[0].text(), "Shop app");
        assert_eq!(cells[1].text(), "Mobile");
        assert_eq!(cells[2].text(), "shop.example.com");
        assert_eq!(cells[3], Cell::Date("Mar 15, 2024".into()));
    }
}
