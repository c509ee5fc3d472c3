use contracts::domain::a005_inquiry_type::InquiryType;
use contracts::domain::a007_contact::ContactDto;
use contracts::enums::EntityKind;
use contracts::shared::translation::MISSING_LABEL;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{public_query, submit_contact};
use crate::layout::global_context::use_global_context;
use crate::shared::collection::{load_options, option_pairs};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::details::{validate_form, DetailsViewModel, FieldErrors};
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::shared::notifications::{use_notifications, Notifier, ToastIntent};
use crate::shared::services::use_services;

/// Public "contact us" form; validated locally before anything is sent
#[component]
pub fn ContactForm() -> impl IntoView {
    let services = use_services();
    let notifier = use_notifications();
    let locale = use_global_context().locale_signal();
    let vm = DetailsViewModel::<ContactDto>::new(EntityKind::Contact);
    let inquiry_types = load_options::<InquiryType>(services.clone(), public_query(false));

    let label = move |msg: Msg| Signal::derive(move || Some(msg.text(locale.get()).to_string()));
    let inquiry_options = Signal::derive(move || {
        let mut options = vec![(String::new(), MISSING_LABEL.to_string())];
        options.extend(inquiry_types.with(|t| option_pairs(t, locale.get())));
        options
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.saving.get_untracked() {
            return;
        }
        let locale = locale.get_untracked();
        let dto = match validate_form(vm.form.get_untracked()) {
            Ok(dto) => dto,
            Err(errors) => {
                vm.errors.set(errors);
                return;
            }
        };
        vm.errors.set(FieldErrors::new());
        vm.error.set(None);
        vm.saving.set(true);

        let services = services.clone();
        spawn_local(async move {
            let client = services.client();
            match submit_contact(&client, &services.cache, &dto).await {
                Ok(()) => {
                    vm.form.set(ContactDto::default());
                    notifier.notify(ToastIntent::Success, Msg::MessageSent.text(locale).to_string());
                }
                Err(e) => {
                    log::warn!("contact submission failed: {}", e);
                    vm.error.set(Some(e.user_message(locale)));
                }
            }
            vm.saving.set(false);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <Input
                    label=label(Msg::Name)
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.name = v))
                    error=vm.field_error("name", locale)
                    autocomplete="name"
                    required=true
                />
                <Input
                    label=label(Msg::Email)
                    input_type="email"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.email = v))
                    error=vm.field_error("email", locale)
                    dir="ltr"
                    autocomplete="email"
                    required=true
                />
            </div>
            <div class="form__row">
                <Input
                    label=label(Msg::Phone)
                    input_type="tel"
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.phone = Some(v)))
                    error=vm.field_error("phone", locale)
                    dir="ltr"
                    autocomplete="tel"
                />
                <Select
                    label=label(Msg::InquiryType)
                    value=Signal::derive(move || vm.form.with(|f| f.inquiry_type_id.clone().unwrap_or_default()))
                    options=inquiry_options
                    on_change=Callback::new(move |v: String| vm.update(|f| f.inquiry_type_id = Some(v)))
                />
            </div>
            <Input
                label=label(Msg::Subject)
                value=Signal::derive(move || vm.form.with(|f| f.subject.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| vm.update(|f| f.subject = Some(v)))
                error=vm.field_error("subject", locale)
            />
            <Textarea
                label=label(Msg::Message)
                value=Signal::derive(move || vm.form.with(|f| f.message.clone()))
                on_input=Callback::new(move |v: String| vm.update(|f| f.message = v))
                error=vm.field_error("message", locale)
                rows=6
            />
            <Button button_type="submit" disabled=vm.saving>
                {icon(IconName::Mail)}
                {move || {
                    let locale = locale.get();
                    if vm.saving.get() { Msg::Loading.text(locale) } else { Msg::SendMessage.text(locale) }
                }}
            </Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_validation_codes() {
        let draft = ContactDto {
            name: "  ".into(),
            email: "not-an-email".into(),
            phone: Some("12".into()),
            message: "short".into(),
            ..ContactDto::default()
        };
        let errors = validate_form(draft).unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("required"));
        assert_eq!(errors.get("email").map(String::as_str), Some("email"));
        assert_eq!(errors.get("phone").map(String::as_str), Some("phone"));
        assert_eq!(errors.get("message").map(String::as_str), Some("message_length"));
    }

    #[test]
    fn test_blank_optional_fields_are_dropped() {
        let draft = ContactDto {
            name: "Lina".into(),
            email: "lina@example.com".into(),
            phone: Some("   ".into()),
            subject: Some("".into()),
            inquiry_type_id: Some("".into()),
            message: "We would like a quote for an app".into(),
            ..ContactDto::default()
        };
        let dto = validate_form(draft).unwrap();
        assert_eq!(dto.phone, None);
        assert_eq!(dto.subject, None);
        assert_eq!(dto.inquiry_type_id, None);
    }
}
