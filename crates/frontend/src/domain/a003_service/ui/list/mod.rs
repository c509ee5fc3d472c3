use contracts::domain::a003_service::Service;
use contracts::enums::EntityKind;
use contracts::shared::query::SortOrder;
use leptos::prelude::*;

use super::details::ServiceDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::RemoteCollection;
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::i18n::Msg;
use crate::shared::list_state::create_state;
use crate::shared::modal::{editor_title, EditorState, Modal};
use crate::shared::projection::{
    active_badge, date_cell, display_cell, featured_badge, icon_cell, text_cell, Cell, ColumnDef,
};
use crate::shared::services::use_services;

pub fn columns() -> Vec<ColumnDef<Service>> {
    vec![
        ColumnDef::new("icon", Msg::Icon, |s: &Service, _| icon_cell(s.icon.as_deref())),
        ColumnDef::new("title", Msg::Title, display_cell),
        ColumnDef::new("slug", Msg::Slug, |s: &Service, _| text_cell(&s.slug)).sortable("slug"),
        ColumnDef::new("order", Msg::Order, |s: &Service, _| Cell::Text(s.order_index.to_string()))
            .sortable("orderIndex"),
        ColumnDef::new("featured", Msg::Featured, |s: &Service, l| featured_badge(s.is_featured, l))
            .sortable("isFeatured"),
        ColumnDef::new("status", Msg::Status, |s: &Service, l| active_badge(s.is_active, l))
            .sortable("isActive"),
        ColumnDef::new("created", Msg::Created, |s: &Service, _| {
            date_cell(s.metadata.created_at.as_deref())
        })
        .sortable("createdAt"),
    ]
}

#[component]
pub fn ServiceList() -> impl IntoView {
    let locale = use_global_context().locale_signal();
    let state = create_state("orderIndex", SortOrder::Asc);
    let collection = RemoteCollection::<Service>::new(use_services(), state, locale);
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
            <FilterSelect
                state=state
                filter_key="isFeatured"
                label=Msg::Featured
                options=Signal::derive(move || bool_options(Msg::Yes, Msg::No, locale.get()))
                locale=locale
            />
        </CollectionPage>
        {move || editor.target().map(|target| {
            let title = editor_title(&target, EntityKind::Service, locale.get_untracked());
            view! {
                <Modal title=title on_close=on_cancel>
                    <ServiceDetails id=target.id() on_saved=on_saved on_cancel=on_cancel />
                </Modal>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::projection::{project_row, BadgeVariant};
    use contracts::shared::locale::Locale;

    #[test]
    fn test_featured_service_badge() {
        let service: Service = serde_json::from_str(
            r#"{"id":"s1","slug":"web","isFeatured":true,
                "translations":[{"locale":"en","title":"Web apps"},{"locale":"ar","title":"تطبيقات الويب"}]}"#,
        )
        .unwrap();
        let cells = project_row(&columns(), &service, Locale::Ar);
        assert_eq!(cells[1].text(), "تطبيقات الويب");
        assert!(matches!(
            cells[4],
            Cell::Badge {
                variant: BadgeVariant::Primary,
                ..
            }
        ));
    }
}
