use contracts::domain::a005_inquiry_type::InquiryType;
use contracts::domain::a007_contact::{Contact, ContactStatusDto};
use contracts::enums::{ContactStatus, EntityKind};
use contracts::shared::query::SortOrder;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::ContactDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::collection::{load_options, option_pairs, options_query, RemoteCollection};
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::table::RowAction;
use crate::shared::i18n::Msg;
use crate::shared::icons::IconName;
use crate::shared::list_state::create_state;
use crate::shared::modal::Modal;
use crate::shared::mutation::{dispatch, Mutation};
use crate::shared::notifications::use_notifications;
use crate::shared::projection::{contact_status_badge, date_cell, opt_text_cell, text_cell, ColumnDef};
use crate::shared::services::use_services;

pub fn columns() -> Vec<ColumnDef<Contact>> {
    vec![
        ColumnDef::new("name", Msg::Name, |c: &Contact, _| text_cell(&c.name)).sortable("name"),
        ColumnDef::new("email", Msg::Email, |c: &Contact, _| text_cell(&c.email)).sortable("email"),
        ColumnDef::new("subject", Msg::Subject, |c: &Contact, _| opt_text_cell(c.subject.as_deref())),
        ColumnDef::new("status", Msg::Status, |c: &Contact, l| contact_status_badge(c.status, l))
            .sortable("status"),
        ColumnDef::new("received", Msg::Received, |c: &Contact, _| {
            date_cell(c.metadata.created_at.as_deref())
        })
        .sortable("createdAt"),
    ]
}

#[component]
pub fn ContactList() -> impl IntoView {
    let services = use_services();
    let notifier = use_notifications();
    let locale = use_global_context().locale_signal();
    let state = create_state("createdAt", SortOrder::Desc);
    let collection = RemoteCollection::<Contact>::new(services.clone(), state, locale);
    let inquiry_types = load_options::<InquiryType>(services.clone(), options_query("orderIndex"));
    let viewing = RwSignal::new(None::<Contact>);

    let set_status = Callback::new(move |(id, status): (String, ContactStatus)| {
        let mutation = match Mutation::status(EntityKind::Contact, &id, &ContactStatusDto { status }) {
            Ok(m) => m,
            Err(e) => {
                log::error!("contact {} status payload: {}", id, e);
                return;
            }
        };
        let services = services.clone();
        spawn_local(async move {
            let client = services.client();
            if dispatch(&client, &services.cache, &notifier, mutation).await.is_ok() {
                viewing.update(|v| {
                    if let Some(contact) = v.as_mut().filter(|c| c.id == id) {
                        contact.status = status;
                    }
                });
                collection.reload();
            }
        });
    });

    let status_action = move |label: Msg, icon: IconName, status: ContactStatus| {
        RowAction::new(
            label,
            icon,
            Callback::new(move |row: Contact| set_status.run((row.id, status))),
        )
    };
    let extra_actions = vec![
        RowAction::new(
            Msg::View,
            IconName::Mail,
            Callback::new(move |row: Contact| viewing.set(Some(row))),
        ),
        status_action(Msg::MarkRead, IconName::Check, ContactStatus::Read)
            .visible_when(|c| c.status == ContactStatus::New),
        status_action(Msg::MarkReplied, IconName::MessageSquare, ContactStatus::Replied)
            .visible_when(|c| matches!(c.status, ContactStatus::New | ContactStatus::Read)),
        status_action(Msg::Archive, IconName::Folder, ContactStatus::Archived)
            .visible_when(|c| c.status != ContactStatus::Archived),
    ];

    let on_close = Callback::new(move |_| viewing.set(None));

    view! {
        <CollectionPage collection=collection columns=columns() extra_actions=extra_actions>
            <FilterSelect
                state=state
                filter_key="status"
                label=Msg::Status
                options=Signal::derive(move || {
                    let locale = locale.get();
                    ContactStatus::all()
                        .into_iter()
                        .map(|s| (s.code().to_string(), s.display_name(locale).to_string()))
                        .collect::<Vec<_>>()
                })
                locale=locale
            />
            <FilterSelect
                state=state
                filter_key="inquiryTypeId"
                label=Msg::InquiryType
                options=Signal::derive(move || inquiry_types.with(|t| option_pairs(t, locale.get())))
                locale=locale
            />
        </CollectionPage>
        {move || viewing.get().map(|contact| {
            let id = contact.id.clone();
            let title = contact.subject.clone().unwrap_or_else(|| contact.name.clone());
            view! {
                <Modal title=title on_close=on_close>
                    <ContactDetails
                        contact=contact
                        inquiry_types=inquiry_types
                        on_status=Callback::new(move |status| set_status.run((id.clone(), status)))
                        on_close=on_close
                    />
                </Modal>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::projection::{project_row, BadgeVariant, Cell};
    use contracts::shared::locale::Locale;

    #[test]
    fn test_contact_row_projection() {
        let contact: Contact = serde_json::from_str(
            r#"{"id":12,"name":"Omar","email":"omar@example.com","message":"Need a mobile app",
                "status":"new","createdAt":"2024-03-15T14:02:26.123Z"}"#,
        )
        .unwrap();
        let cells = project_row(&columns(), &contact, Locale::Ar);
        assert_eq!(cells[0].text(), "Omar");
        assert_eq!(cells[2].text(), "—");
        assert_eq!(
            cells[3],
            Cell::Badge {
                label: "جديد".into(),
                variant: BadgeVariant::Warning
            }
        );
        assert_eq!(cells[4].text(), "Mar 15, 2024");
    }
}
