use contracts::domain::a005_inquiry_type::InquiryType;
use contracts::enums::EntityKind;
use contracts::shared::query::SortOrder;
use leptos::prelude::*;

use super::details::InquiryTypeDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::RemoteCollection;
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::i18n::Msg;
use crate::shared::list_state::create_state;
use crate::shared::modal::{editor_title, EditorState, Modal};
use crate::shared::projection::{active_badge, display_cell, text_cell, Cell, ColumnDef};
use crate::shared::services::use_services;

pub fn columns() -> Vec<ColumnDef<InquiryType>> {
    vec![
        ColumnDef::new("name", Msg::Name, display_cell),
        ColumnDef::new("slug", Msg::Slug, |i: &InquiryType, _| text_cell(&i.slug)).sortable("slug"),
        ColumnDef::new("order", Msg::Order, |i: &InquiryType, _| {
            Cell::Text(i.order_index.to_string())
        })
        .sortable("orderIndex"),
        ColumnDef::new("status", Msg::Status, |i: &InquiryType, l| active_badge(i.is_active, l))
            .sortable("isActive"),
    ]
}

#[component]
pub fn InquiryTypeList() -> impl IntoView {
    let locale = use_global_context().locale_signal();
    let state = create_state("orderIndex", SortOrder::Asc);
    let collection = RemoteCollection::<InquiryType>::new(use_services(), state, locale);
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
            let title = editor_title(&target, EntityKind::InquiryType, locale.get_untracked());
            view! {
                <Modal title=title on_close=on_cancel>
                    <InquiryTypeDetails id=target.id() on_saved=on_saved on_cancel=on_cancel />
                </Modal>
            }
        })}
    }
}
