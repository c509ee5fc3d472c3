use leptos::prelude::*;

use crate::shared::projection::BadgeVariant;

/// Badge component with different variants
#[component]
pub fn Badge(
    variant: BadgeVariant,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge badge--{} {}", variant.code(), additional_class())>
            {children()}
        </span>
    }
}
