use leptos::prelude::*;

use super::context::use_auth;
use crate::layout::global_context::use_global_context;
use crate::shared::i18n::Msg;

/// Renders `children` for a signed-in user and `fallback` otherwise
#[component]
pub fn RequireAuth(
    #[prop(into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let ctx = use_global_context();

    move || {
        if auth.restoring.get() {
            view! {
                <div class="page page--centered">
                    <span class="spinner" />
                    {move || Msg::Loading.text(ctx.locale.get())}
                </div>
            }
            .into_any()
        } else if auth.is_authenticated() {
            children().into_any()
        } else {
            fallback.run()
        }
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let ctx = use_global_context();

    view! {
        <Show
            when=move || auth.is_admin()
            fallback=move || view! {
                <div class="alert alert--error">{move || Msg::AccessDenied.text(ctx.locale.get())}</div>
            }
        >
            {children()}
        </Show>
    }
}
