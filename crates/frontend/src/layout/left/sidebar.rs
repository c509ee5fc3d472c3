//! Sidebar with one entry per admin collection, grouped

use contracts::enums::EntityKind;
use contracts::shared::locale::Locale;
use leptos::prelude::*;

use crate::layout::global_context::{use_global_context, Section};
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: (&'static str, &'static str),
    items: Vec<EntityKind>,
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "content",
            label: ("Content", "المحتوى"),
            items: vec![
                EntityKind::Project,
                EntityKind::Service,
                EntityKind::Category,
                EntityKind::Technology,
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "engagement",
            label: ("Engagement", "التواصل"),
            items: vec![
                EntityKind::Contact,
                EntityKind::InquiryType,
                EntityKind::Testimonial,
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "settings",
            label: ("Settings", "الإعدادات"),
            items: vec![EntityKind::User],
            admin_only: true,
        },
    ]
}

pub fn entity_icon(kind: EntityKind) -> IconName {
    match kind {
        EntityKind::Category => IconName::Folder,
        EntityKind::Technology => IconName::Cpu,
        EntityKind::Service => IconName::Layers,
        EntityKind::Testimonial => IconName::Star,
        EntityKind::InquiryType => IconName::HelpCircle,
        EntityKind::Project => IconName::Briefcase,
        EntityKind::Contact => IconName::Mail,
        EntityKind::User => IconName::Users,
    }
}

#[component]
fn SidebarItem(section: Section, icon_name: IconName, #[prop(into)] label: Signal<String>) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.section.get() == section
            on:click=move |_| ctx.navigate(section)
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let locale = ctx.locale;

    view! {
        <div class="app-sidebar__content">
            <SidebarItem
                section=Section::Dashboard
                icon_name=IconName::Home
                label=Signal::derive(move || Msg::Dashboard.text(locale.get()).to_string())
            />
            {move || {
                let is_admin = auth.is_admin();
                get_menu_groups()
                    .into_iter()
                    .filter(|group| !group.admin_only || is_admin)
                    .map(|group| {
                        let (en, ar) = group.label;
                        view! {
                            <div class="app-sidebar__group" data-group=group.id>
                                <div class="app-sidebar__group-title">
                                    {move || match locale.get() {
                                        Locale::En => en,
                                        Locale::Ar => ar,
                                    }}
                                </div>
                                {group.items.into_iter().map(|kind| view! {
                                    <SidebarItem
                                        section=Section::Entity(kind)
                                        icon_name=entity_icon(kind)
                                        label=Signal::derive(move || kind.list_name(locale.get()).to_string())
                                    />
                                }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_collection_has_a_menu_entry() {
        let listed: Vec<EntityKind> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .collect();
        for kind in EntityKind::all() {
            assert_eq!(listed.iter().filter(|k| **k == kind).count(), 1, "{:?}", kind);
        }
    }
}
