use contracts::domain::a005_inquiry_type::InquiryType;
use contracts::domain::a007_contact::Contact;
use contracts::domain::common::Entity;
use contracts::enums::ContactStatus;
use contracts::shared::translation::MISSING_LABEL;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::table::render_cell;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::shared::projection::contact_status_badge;

/// Status transitions offered for a message in `status`
pub fn next_statuses(status: ContactStatus) -> Vec<(ContactStatus, Msg)> {
    let mut next = Vec::new();
    if status == ContactStatus::New {
        next.push((ContactStatus::Read, Msg::MarkRead));
    }
    if matches!(status, ContactStatus::New | ContactStatus::Read) {
        next.push((ContactStatus::Replied, Msg::MarkReplied));
    }
    if status != ContactStatus::Archived {
        next.push((ContactStatus::Archived, Msg::Archive));
    }
    next
}

/// Read-only view of a submitted message
#[component]
pub fn ContactDetails(
    contact: Contact,
    inquiry_types: RwSignal<Vec<InquiryType>>,
    on_status: Callback<ContactStatus>,
    on_close: Callback<()>,
) -> impl IntoView {
    let locale = use_global_context().locale_signal();
    let status = contact.status;
    let inquiry_type_id = contact.inquiry_type_id.clone();
    let inquiry_type = move || {
        let locale = locale.get();
        inquiry_types.with(|types| {
            inquiry_type_id
                .as_deref()
                .and_then(|id| types.iter().find(|t| t.id == id))
                .map(|t| t.display_name(locale))
                .unwrap_or_else(|| MISSING_LABEL.to_string())
        })
    };
    let received = contact
        .metadata
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let field = move |msg: Msg| move || msg.text(locale.get());
    let mailto = format!("mailto:{}", contact.email);

    view! {
        <div class="details-container contact-details">
            <dl class="details-list">
                <dt>{field(Msg::Name)}</dt>
                <dd>{contact.name.clone()}</dd>
                <dt>{field(Msg::Email)}</dt>
                <dd dir="ltr"><a href=mailto>{contact.email.clone()}</a></dd>
                <dt>{field(Msg::Phone)}</dt>
                <dd dir="ltr">{contact.phone.clone().unwrap_or_else(|| MISSING_LABEL.to_string())}</dd>
                <dt>{field(Msg::InquiryType)}</dt>
                <dd>{inquiry_type}</dd>
                <dt>{field(Msg::Subject)}</dt>
                <dd>{contact.subject.clone().unwrap_or_else(|| MISSING_LABEL.to_string())}</dd>
                <dt>{field(Msg::Status)}</dt>
                <dd>{move || render_cell(contact_status_badge(status, locale.get()))}</dd>
                <dt>{field(Msg::Received)}</dt>
                <dd>{received}</dd>
            </dl>
            <h3 class="details-form__section">{field(Msg::Message)}</h3>
            <p class="contact-details__message" dir="auto">{contact.message.clone()}</p>
            <div class="details-actions">
                {next_statuses(status)
                    .into_iter()
                    .map(|(next, label)| view! {
                        <Button variant="secondary" on_click=Callback::new(move |_| on_status.run(next))>
                            {move || label.text(locale.get())}
                        </Button>
                    })
                    .collect_view()}
                <Button variant="ghost" on_click=Callback::new(move |_| on_close.run(()))>
                    {icon(IconName::X)}
                    {field(Msg::Close)}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(status: ContactStatus) -> Vec<ContactStatus> {
        next_statuses(status).into_iter().map(|(s, _)| s).collect()
    }

    #[test]
    fn test_next_statuses() {
        assert_eq!(
            statuses(ContactStatus::New),
            vec![ContactStatus::Read, ContactStatus::Replied, ContactStatus::Archived]
        );
        assert_eq!(
            statuses(ContactStatus::Replied),
            vec![ContactStatus::Archived]
        );
        assert!(statuses(ContactStatus::Archived).is_empty());
    }
}
