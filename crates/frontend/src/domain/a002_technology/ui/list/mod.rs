use contracts::domain::a001_category::Category;
use contracts::domain::a002_technology::Technology;
use contracts::enums::EntityKind;
use contracts::shared::query::SortOrder;
use leptos::prelude::*;

use super::details::TechnologyDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::{load_options, option_pairs, options_query, RemoteCollection};
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::i18n::Msg;
use crate::shared::list_state::create_state;
use crate::shared::modal::{editor_title, EditorState, Modal};
use crate::shared::projection::{
    active_badge, date_cell, display_cell, icon_cell, text_cell, Cell, ColumnDef,
};
use crate::shared::services::use_services;

pub fn columns() -> Vec<ColumnDef<Technology>> {
    vec![
        ColumnDef::new("icon", Msg::Icon, |t: &Technology, _| icon_cell(t.icon.as_deref())),
        ColumnDef::new("name", Msg::Name, display_cell),
        ColumnDef::new("slug", Msg::Slug, |t: &Technology, _| text_cell(&t.slug)).sortable("slug"),
        ColumnDef::new("order", Msg::Order, |t: &Technology, _| {
            Cell::Text(t.order_index.to_string())
        })
        .sortable("orderIndex"),
        ColumnDef::new("status", Msg::Status, |t: &Technology, l| active_badge(t.is_active, l))
            .sortable("isActive"),
        ColumnDef::new("created", Msg::Created, |t: &Technology, _| {
            date_cell(t.metadata.created_at.as_deref())
        })
        .sortable("createdAt"),
    ]
}

#[component]
pub fn TechnologyList() -> impl IntoView {
    let services = use_services();
    let locale = use_global_context().locale_signal();
    let state = create_state("orderIndex", SortOrder::Asc);
    let collection = RemoteCollection::<Technology>::new(services.clone(), state, locale);
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
                filter_key="isActive"
                label=Msg::Status
                options=Signal::derive(move || bool_options(Msg::Active, Msg::Inactive, locale.get()))
                locale=locale
            />
        </CollectionPage>
        {move || editor.target().map(|target| {
            let title = editor_title(&target, EntityKind::Technology, locale.get_untracked());
            view! {
                <Modal title=title on_close=on_cancel>
                    <TechnologyDetails id=target.id() on_saved=on_saved on_cancel=on_cancel />
                </Modal>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icons::IconName;
    use crate::shared::projection::project_row;
    use contracts::shared::locale::Locale;

    #[test]
    fn test_technology_row_projection() {
        let technology: Technology = serde_json::from_str(
            r#"{"id":"t1","slug":"rust","icon":"code","categoryId":3,
                "translations":[{"locale":"en","name":"Rust"}]}"#,
        )
        .unwrap();
        let cells = project_row(&columns(), &technology, Locale::Ar);
        assert_eq!(
            cells[0],
            Cell::Icon {
                name: IconName::Code,
                label: "code".into()
            }
        );
        assert_eq!(cells[1].text(), "Rust");
        assert_eq!(cells[2].text(), "rust");
    }
}
