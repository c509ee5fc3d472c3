use contracts::domain::a001_category::Category;
use contracts::domain::a002_technology::Technology;
use contracts::domain::a003_service::Service;
use contracts::domain::a004_testimonial::Testimonial;
use contracts::domain::a005_inquiry_type::InquiryType;
use contracts::domain::a006_project::Project;
use contracts::domain::a007_contact::Contact;
use contracts::domain::common::Entity;
use contracts::enums::{ContactStatus, EntityKind};
use contracts::shared::query::{FilterValue, ListQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::dashboards::d001_overview::api::{count, count_query};
use crate::layout::global_context::{use_global_context, Section};
use crate::layout::left::sidebar::entity_icon;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::i18n::Msg;
use crate::shared::icons::IconName;
use crate::shared::services::{use_services, AppServices};
use crate::system::auth::context::use_auth;

fn load_count<E>(services: AppServices, query: ListQuery) -> RwSignal<Option<u64>>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let total = RwSignal::new(None);
    spawn_local(async move {
        let client = services.client();
        match count::<E, _, _>(&client, &services.cache, &query).await {
            Ok(n) => total.set(Some(n)),
            Err(e) => log::warn!("{} count unavailable: {}", E::collection_name(), e),
        }
    });
    total
}

#[component]
fn EntityCard(kind: EntityKind, total: RwSignal<Option<u64>>) -> impl IntoView {
    let ctx = use_global_context();
    view! {
        <StatCard
            label=Signal::derive(move || kind.list_name(ctx.locale.get()).to_string())
            icon_name=entity_icon(kind)
            value=total
            on_click=Callback::new(move |_| ctx.navigate(Section::Entity(kind)))
        />
    }
}

/// Landing page of the admin: record counts per collection
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let services = use_services();
    let ctx = use_global_context();
    let auth = use_auth();
    let locale = ctx.locale_signal();

    let unread = load_count::<Contact>(
        services.clone(),
        count_query(Some(("status", FilterValue::Text(ContactStatus::New.code().to_string())))),
    );
    let projects = load_count::<Project>(services.clone(), count_query(None));
    let services_total = load_count::<Service>(services.clone(), count_query(None));
    let categories = load_count::<Category>(services.clone(), count_query(None));
    let technologies = load_count::<Technology>(services.clone(), count_query(None));
    let testimonials = load_count::<Testimonial>(services.clone(), count_query(None));
    let inquiry_types = load_count::<InquiryType>(services.clone(), count_query(None));
    let contacts = load_count::<Contact>(services, count_query(None));

    let welcome = Signal::derive(move || {
        let locale = locale.get();
        auth.user_name()
            .map(|name| Msg::Welcome.format(locale, &name))
            .unwrap_or_else(|| Msg::Dashboard.text(locale).to_string())
    });

    view! {
        <div class="page" id="dashboard">
            <PageHeader title=welcome />
            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label=Signal::derive(move || Contact::list_name(locale.get()).to_string())
                        icon_name=IconName::MessageSquare
                        value=unread
                        attention=Signal::derive(move || unread.get().unwrap_or(0) > 0)
                        subtitle=Signal::derive(move || Some(ContactStatus::New.display_name(locale.get()).to_string()))
                        on_click=Callback::new(move |_| ctx.navigate(Section::Entity(EntityKind::Contact)))
                    />
                    <EntityCard kind=EntityKind::Project total=projects />
                    <EntityCard kind=EntityKind::Service total=services_total />
                    <EntityCard kind=EntityKind::Category total=categories />
                    <EntityCard kind=EntityKind::Technology total=technologies />
                    <EntityCard kind=EntityKind::Testimonial total=testimonials />
                    <EntityCard kind=EntityKind::InquiryType total=inquiry_types />
                    <EntityCard kind=EntityKind::Contact total=contacts />
                </div>
            </div>
        </div>
    }
}
