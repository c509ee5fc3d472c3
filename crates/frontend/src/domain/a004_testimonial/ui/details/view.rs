use contracts::domain::a004_testimonial::{Testimonial, TestimonialDto, TestimonialTranslation};
use contracts::enums::EntityKind;
use contracts::shared::translation::find_translation;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::form_actions::FormActions;
use crate::shared::components::translation_tabs::TranslationTabs;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::details::{edit_translation, DetailsViewModel};
use crate::shared::i18n::Msg;
use crate::shared::notifications::use_notifications;
use crate::shared::services::use_services;

fn rating_options() -> Vec<(String, String)> {
    (1..=5u8)
        .rev()
        .map(|r| (r.to_string(), "★".repeat(r as usize)))
        .collect()
}

#[component]
pub fn TestimonialDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_services();
    let notifier = use_notifications();
    let locale = use_global_context().locale_signal();
    let vm = DetailsViewModel::<TestimonialDto>::new(EntityKind::Testimonial);
    let tab = RwSignal::new(locale.get_untracked());
    vm.load_if_needed::<Testimonial>(services.clone(), id, locale.get_untracked());

    let label = move |msg: Msg| Signal::derive(move || Some(msg.text(locale.get()).to_string()));
    let translated = move |f: fn(&TestimonialTranslation) -> String| {
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
                    label=label(Msg::Company)
                    value=Signal::derive(move || vm.form.with(|f| f.company.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.company = Some(v)))
                    error=vm.field_error("company", locale)
                />
                <Input
                    label=label(Msg::AvatarUrl)
                    input_type="url"
                    value=Signal::derive(move || vm.form.with(|f| f.avatar_url.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.avatar_url = Some(v)))
                    placeholder="https://"
                    error=vm.field_error("avatar_url", locale)
                    dir="ltr"
                />
                <Select
                    label=label(Msg::Rating)
                    value=Signal::derive(move || vm.form.with(|f| f.rating.to_string()))
                    options=Signal::derive(rating_options)
                    on_change=Callback::new(move |v: String| {
                        if let Ok(r) = v.parse() {
                            vm.update(|f| f.rating = r);
                        }
                    })
                    error=vm.field_error("rating", locale)
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
                <Checkbox
                    label=Signal::derive(move || Msg::Featured.text(locale.get()).to_string())
                    checked=Signal::derive(move || vm.form.with(|f| f.is_featured))
                    on_change=Callback::new(move |v: bool| vm.update(|f| f.is_featured = v))
                />

                <h3 class="details-form__section">{move || Msg::Translations.text(locale.get())}</h3>
                <TranslationTabs active=tab error=vm.field_error("translations", locale) />
                <Input
                    label=label(Msg::ClientName)
                    value=translated(|tr| tr.client_name.clone())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.client_name = v))
                    })
                    dir=tab_dir
                />
                <Input
                    label=label(Msg::Position)
                    value=translated(|tr| tr.position.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| {
                            edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.position = Some(v))
                        })
                    })
                    dir=tab_dir
                />
                <Textarea
                    label=label(Msg::Content)
                    value=translated(|tr| tr.content.clone())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.content = v))
                    })
                    dir=tab_dir
                    rows=5
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_options_best_first() {
        let options = rating_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], ("5".to_string(), "★★★★★".to_string()));
        assert_eq!(options[4].0, "1");
    }
}
