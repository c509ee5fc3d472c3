use contracts::domain::a005_inquiry_type::{InquiryType, InquiryTypeDto};
use contracts::enums::EntityKind;
use contracts::shared::translation::find_translation;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::form_actions::FormActions;
use crate::shared::components::translation_tabs::TranslationTabs;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::details::{edit_translation, DetailsViewModel};
use crate::shared::i18n::Msg;
use crate::shared::notifications::use_notifications;
use crate::shared::services::use_services;

#[component]
pub fn InquiryTypeDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_services();
    let notifier = use_notifications();
    let locale = use_global_context().locale_signal();
    let vm = DetailsViewModel::<InquiryTypeDto>::new(EntityKind::InquiryType);
    let tab = RwSignal::new(locale.get_untracked());
    vm.load_if_needed::<InquiryType>(services.clone(), id, locale.get_untracked());

    let label = move |msg: Msg| Signal::derive(move || Some(msg.text(locale.get()).to_string()));

    view! {
        <div class="details-container">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <Input
                    label=label(Msg::Slug)
                    value=Signal::derive(move || vm.form.with(|f| f.slug.clone()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.slug = v))
                    placeholder="project-request"
                    error=vm.field_error("slug", locale)
                    dir="ltr"
                />
                <Input
                    label=label(Msg::Order)
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| f.order_index.to_string()))
                    on_input=Callback::new(move |v: String| {
                        if let Ok(n) = v.trim().parse() {
                            vm.update(|f| f.order_index = n);
                        }
                    })
                    error=vm.field_error("order_index", locale)
                />
                <Checkbox
                    label=Signal::derive(move || Msg::Active.text(locale.get()).to_string())
                    checked=Signal::derive(move || vm.form.with(|f| f.is_active))
                    on_change=Callback::new(move |v: bool| vm.update(|f| f.is_active = v))
                />

                <h3 class="details-form__section">{move || Msg::Translations.text(locale.get())}</h3>
                <TranslationTabs active=tab error=vm.field_error("translations", locale) />
                <Input
                    label=label(Msg::Name)
                    value=Signal::derive(move || {
                        vm.form.with(|f| {
                            find_translation(&f.translations, tab.get())
                                .map(|tr| tr.name.clone())
                                .unwrap_or_default()
                        })
                    })
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.name = v))
                    })
                    dir=Signal::derive(move || Some(tab.get().dir().to_string()))
                />
            </div>
            <FormActions
                locale=locale
                saving=vm.saving
                disabled=vm.save_disabled()
                is_create=Signal::derive(move || !vm.is_edit_mode())
                on_save=Callback::new(move |_| {
                    vm.save_command(services.clone(), notifier, locale.get_untracked(), on_saved)
                })
                on_cancel=on_cancel
            />
        </div>
    }
}
