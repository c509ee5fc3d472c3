use contracts::enums::{EntityKind, UserRole};
use contracts::shared::locale::Locale;
use contracts::system::users::{User, UserDto};
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::form_actions::FormActions;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::details::DetailsViewModel;
use crate::shared::i18n::Msg;
use crate::shared::notifications::use_notifications;
use crate::shared::services::use_services;

pub fn role_options(locale: Locale) -> Vec<(String, String)> {
    UserRole::all()
        .into_iter()
        .map(|r| (r.code().to_string(), r.display_name(locale).to_string()))
        .collect()
}

#[component]
pub fn UserDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_services();
    let notifier = use_notifications();
    let locale = use_global_context().locale_signal();
    let vm = DetailsViewModel::<UserDto>::new(EntityKind::User);
    vm.load_if_needed::<User>(services.clone(), id, locale.get_untracked());

    let label = move |msg: Msg| Signal::derive(move || Some(msg.text(locale.get()).to_string()));

    view! {
        <div class="details-container">
            {move || vm.loading.get().then(|| view! { <div class="details-loading">{Msg::Loading.text(locale.get())}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <Input
                    label=label(Msg::Name)
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.name = v))
                    error=vm.field_error("name", locale)
                    required=true
                />
                <Input
                    label=label(Msg::Email)
                    input_type="email"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.email = v))
                    error=vm.field_error("email", locale)
                    dir="ltr"
                    autocomplete="off"
                    required=true
                />
                <Input
                    label=label(Msg::Password)
                    input_type="password"
                    value=Signal::derive(move || vm.form.with(|f| f.password.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.password = Some(v)))
                    placeholder=Signal::derive(move || {
                        vm.is_edit_mode().then(|| Msg::PasswordHint.text(locale.get()).to_string())
                    })
                    error=vm.field_error("password", locale)
                    dir="ltr"
                    autocomplete="new-password"
                />
                <Select
                    label=label(Msg::Role)
                    value=Signal::derive(move || vm.form.with(|f| f.role.code().to_string()))
                    options=Signal::derive(move || role_options(locale.get()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(role) = UserRole::from_code(&v) {
                            vm.update(|f| f.role = role);
                        }
                    })
                />
                <Checkbox
                    label=Signal::derive(move || Msg::Active.text(locale.get()).to_string())
                    checked=Signal::derive(move || vm.form.with(|f| f.is_active))
                    on_change=Callback::new(move |v: bool| vm.update(|f| f.is_active = v))
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
