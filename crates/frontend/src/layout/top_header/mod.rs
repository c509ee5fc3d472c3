//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and application title
//! - Locale switcher (EN / AR)
//! - Link back to the public site
//! - Signed-in user and logout

use contracts::shared::locale::Locale;
use leptos::prelude::*;

use crate::layout::global_context::{use_global_context, Section};
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::system::auth::context::{do_logout, use_auth};

/// Buttons switching the UI language; also used on the public site
#[component]
pub fn LocaleSwitcher() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="locale-switcher" title=move || Msg::Language.text(ctx.locale.get())>
            {icon(IconName::Globe)}
            {Locale::all()
                .into_iter()
                .map(|locale| view! {
                    <button
                        class="locale-switcher__option"
                        class:locale-switcher__option--active=move || ctx.locale.get() == locale
                        on:click=move |_| ctx.set_locale(locale)
                    >
                        {locale.code().to_uppercase()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let locale = ctx.locale;

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        do_logout();
        ctx.navigate(Section::Site);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=toggle_sidebar>
                    {icon(IconName::Menu)}
                </button>
                <span class="top-header__title">{move || Msg::AppTitle.text(locale.get())}</span>
            </div>

            <div class="top-header__actions">
                <LocaleSwitcher />

                <button class="top-header__icon-btn" on:click=move |_| ctx.navigate(Section::Site)>
                    {icon(IconName::ExternalLink)}
                    <span>{move || Msg::VisitSite.text(locale.get())}</span>
                </button>

                <div class="top-header__user">
                    {icon(IconName::Users)}
                    <span>
                        {move || auth.user_name().unwrap_or_default()}
                    </span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    title=move || Msg::SignOut.text(locale.get())
                >
                    {icon(IconName::LogOut)}
                </button>
            </div>
        </div>
    }
}
