use contracts::domain::a001_category::Category;
use contracts::enums::EntityKind;
use contracts::shared::query::SortOrder;
use leptos::prelude::*;

use super::details::CategoryDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::RemoteCollection;
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::i18n::Msg;
use crate::shared::list_state::create_state;
use crate::shared::modal::{editor_title, EditorState, Modal};
use crate::shared::projection::{active_badge, date_cell, display_cell, text_cell, ColumnDef, Cell};
use crate::shared::services::use_services;

pub fn columns() -> Vec<ColumnDef<Category>> {
    vec![
        ColumnDef::new("name", Msg::Name, display_cell),
        ColumnDef::new("slug", Msg::Slug, |c: &Category, _| text_cell(&c.slug)).sortable("slug"),
        ColumnDef::new("order", Msg::Order, |c: &Category, _| Cell::Text(c.order_index.to_string()))
            .sortable("orderIndex"),
        ColumnDef::new("status", Msg::Status, |c: &Category, l| active_badge(c.is_active, l))
            .sortable("isActive"),
        ColumnDef::new("created", Msg::Created, |c: &Category, _| {
            date_cell(c.metadata.created_at.as_deref())
        })
        .sortable("createdAt"),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_global_context();
    let locale = ctx.locale_signal();
    let state = create_state("orderIndex", SortOrder::Asc);
    let collection = RemoteCollection::<Category>::new(use_services(), state, locale);
    let editor = EditorState::new();

    let on_saved = Callback::new(move |_| {
        editor.close();
        collection.reload();
    });
    let on_cancel = Callback::new(move |_| editor.close());

    view! {
        <CollectionPage collection=collection columns=columns() editor=editor>
            <FilterSelect
                state=state
                filter_key="isActive"
                label=Msg::Status
                options=Signal::derive(move || bool_options(Msg::Active, Msg::Inactive, locale.get()))
                locale=locale
            />
        </CollectionPage>
        {move || editor.target().map(|target| {
            let title = editor_title(&target, EntityKind::Category, locale.get_untracked());
            view! {
                <Modal title=title on_close=on_cancel>
                    <CategoryDetails id=target.id() on_saved=on_saved on_cancel=on_cancel />
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
    fn test_category_row_projection() {
        let category: Category = serde_json::from_str(
            r#"{"id":"3","slug":"mobile","orderIndex":4,"isActive":false,
                "translations":[{"locale":"ar","name":"تطبيقات"}]}"#,
        )
        .unwrap();
        let cells = project_row(&columns(), &category, Locale::En);
        assert_eq!(cells[0].text(), "تطبيقات");
        assert_eq!(cells[1].text(), "mobile");
        assert_eq!(cells[2].text(), "4");
        assert_eq!(cells[4], Cell::Muted("—".into()));
    }
}
