use contracts::shared::locale::Locale;
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};

/// Save / cancel row at the bottom of an entity form
#[component]
pub fn FormActions(
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] saving: Signal<bool>,
    /// Blocks saving without changing the label (record still loading)
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Create mode labels the button "Create"
    #[prop(into)] is_create: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="details-actions">
            <Button
                disabled=Signal::derive(move || saving.get() || disabled.get())
                on_click=Callback::new(move |_| on_save.run(()))
            >
                {icon(IconName::Save)}
                {move || {
                    let locale = locale.get();
                    if saving.get() {
                        Msg::Loading.text(locale)
                    } else if is_create.get() {
                        Msg::Create.text(locale)
                    } else {
                        Msg::Save.text(locale)
                    }
                }}
            </Button>
            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                {move || Msg::Cancel.text(locale.get())}
            </Button>
        </div>
    }
}
