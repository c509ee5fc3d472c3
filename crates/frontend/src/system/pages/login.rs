use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_global_context;
use crate::layout::top_header::LocaleSwitcher;
use crate::shared::i18n::Msg;
use crate::shared::services::use_services;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let locale = use_global_context().locale_signal();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let locale = locale.get_untracked();

        is_loading.set(true);
        error_message.set(None);

        let session = services.session.clone();
        spawn_local(async move {
            // A successful login updates the session; the auth guard then swaps in the admin
            match session.login(email_val.trim(), &password_val).await {
                Ok(user) => log::info!("signed in as {}", user.email),
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    error_message.set(Some(e.user_message(locale)));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__locale">
                    <LocaleSwitcher />
                </div>
                <h1>{move || Msg::AppTitle.text(locale.get())}</h1>
                <h2>{move || Msg::SignInTitle.text(locale.get())}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">{move || Msg::Email.text(locale.get())}</label>
                        <input
                            type="email"
                            id="email"
                            dir="ltr"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{move || Msg::Password.text(locale.get())}</label>
                        <input
                            type="password"
                            id="password"
                            dir="ltr"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || {
                            let locale = locale.get();
                            if is_loading.get() { Msg::SigningIn.text(locale) } else { Msg::SignIn.text(locale) }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
