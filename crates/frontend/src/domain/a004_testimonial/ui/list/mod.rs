use contracts::domain::a004_testimonial::Testimonial;
use contracts::enums::EntityKind;
use contracts::shared::query::SortOrder;
use leptos::prelude::*;

use super::details::TestimonialDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::RemoteCollection;
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::i18n::Msg;
use crate::shared::list_state::create_state;
use crate::shared::modal::{editor_title, EditorState, Modal};
use crate::shared::projection::{
    active_badge, display_cell, featured_badge, opt_text_cell, rating_cell, ColumnDef,
};
use crate::shared::services::use_services;

pub fn columns() -> Vec<ColumnDef<Testimonial>> {
    vec![
        ColumnDef::new("client", Msg::ClientName, display_cell),
        ColumnDef::new("company", Msg::Company, |t: &Testimonial, _| {
            opt_text_cell(t.company.as_deref())
        })
        .sortable("company"),
        ColumnDef::new("rating", Msg::Rating, |t: &Testimonial, _| rating_cell(t.rating))
            .sortable("rating"),
        ColumnDef::new("featured", Msg::Featured, |t: &Testimonial, l| {
            featured_badge(t.is_featured, l)
        })
        .sortable("isFeatured"),
        ColumnDef::new("status", Msg::Status, |t: &Testimonial, l| active_badge(t.is_active, l))
            .sortable("isActive"),
    ]
}

#[component]
pub fn TestimonialList() -> impl IntoView {
    let locale = use_global_context().locale_signal();
    let state = create_state("orderIndex", SortOrder::Asc);
    let collection = RemoteCollection::<Testimonial>::new(use_services(), state, locale);
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
            let title = editor_title(&target, EntityKind::Testimonial, locale.get_untracked());
            view! {
                <Modal title=title on_close=on_cancel>
                    <TestimonialDetails id=target.id() on_saved=on_saved on_cancel=on_cancel />
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
    fn test_testimonial_without_company() {
        let testimonial: Testimonial = serde_json::from_str(
            r#"{"id":"9","rating":4,
                "translations":[{"locale":"en","clientName":"Sara","content":"Great work"}]}"#,
        )
        .unwrap();
        let cells = project_row(&columns(), &testimonial, Locale::En);
        assert_eq!(cells[0].text(), "Sara");
        assert_eq!(cells[1].text(), "—");
        assert_eq!(cells[2].text(), "★★★★☆");
    }
}
