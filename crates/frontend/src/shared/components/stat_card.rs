use leptos::prelude::*;

use crate::shared::icons::{icon, IconName};

/// Groups digits by thousands with a no-break space, `12 345`
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    icon_name: IconName,
    /// Primary value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Highlight the card, e.g. for unread messages
    #[prop(into, optional)]
    attention: Signal<bool>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div
            class="stat-card"
            class:stat-card--warning=move || attention.get()
            class:stat-card--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12345), "12\u{00a0}345");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
