use contracts::domain::a003_service::{Service, ServiceDto, ServiceTranslation};
use contracts::enums::EntityKind;
use contracts::shared::translation::find_translation;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::form_actions::FormActions;
use crate::shared::components::translation_tabs::TranslationTabs;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::details::{edit_translation, DetailsViewModel};
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::shared::notifications::use_notifications;
use crate::shared::services::use_services;

#[component]
pub fn ServiceDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_services();
    let notifier = use_notifications();
    let locale = use_global_context().locale_signal();
    let vm = DetailsViewModel::<ServiceDto>::new(EntityKind::Service);
    let tab = RwSignal::new(locale.get_untracked());
    vm.load_if_needed::<Service>(services.clone(), id, locale.get_untracked());

    let t = move |msg: Msg| Some(msg.text(locale.get()).to_string());
    let translated = move |f: fn(&ServiceTranslation) -> String| {
        Signal::derive(move || {
            vm.form
                .with(|form| find_translation(&form.translations, tab.get()).map(f).unwrap_or_default())
        })
    };
    let tab_dir = Signal::derive(move || Some(tab.get().dir().to_string()));

    view! {
        <div class="details-container">
            {move || vm.loading.get().then(|| view! { <div class="details-loading">{Msg::Loading.text(locale.get())}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <Input
                    label=Signal::derive(move || t(Msg::Slug))
                    value=Signal::derive(move || vm.form.with(|f| f.slug.clone()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.slug = v))
                    placeholder="mobile-apps"
                    error=vm.field_error("slug", locale)
                    dir="ltr"
                />
                <div class="form__row">
                    <Input
                        label=Signal::derive(move || t(Msg::Icon))
                        value=Signal::derive(move || vm.form.with(|f| f.icon.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v: String| vm.update(|f| f.icon = Some(v)))
                        placeholder="smartphone"
                        error=vm.field_error("icon", locale)
                        dir="ltr"
                    />
                    <span class="form__icon-preview">
                        {move || icon(IconName::from_name(&vm.form.with(|f| f.icon.clone().unwrap_or_default())))}
                    </span>
                </div>
                <Input
                    label=Signal::derive(move || t(Msg::Order))
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
                <Checkbox
                    label=Signal::derive(move || Msg::Featured.text(locale.get()).to_string())
                    checked=Signal::derive(move || vm.form.with(|f| f.is_featured))
                    on_change=Callback::new(move |v: bool| vm.update(|f| f.is_featured = v))
                />

                <h3 class="details-form__section">{move || Msg::Translations.text(locale.get())}</h3>
                <TranslationTabs active=tab error=vm.field_error("translations", locale) />
                <Input
                    label=Signal::derive(move || t(Msg::Title))
                    value=translated(|tr| tr.title.clone())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.title = v))
                    })
                    dir=tab_dir
                />
                <Textarea
                    label=Signal::derive(move || t(Msg::Description))
                    value=translated(|tr| tr.description.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| {
                            edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.description = Some(v))
                        })
                    })
                    dir=tab_dir
                    rows=4
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
