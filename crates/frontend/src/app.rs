use contracts::enums::EntityKind;
use leptos::prelude::*;

use crate::config::app_config;
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_technology::ui::list::TechnologyList;
use crate::domain::a003_service::ui::list::ServiceList;
use crate::domain::a004_testimonial::ui::list::TestimonialList;
use crate::domain::a005_inquiry_type::ui::list::InquiryTypeList;
use crate::domain::a006_project::ui::list::ProjectList;
use crate::domain::a007_contact::ui::list::ContactList;
use crate::layout::global_context::{use_global_context, AppGlobalContext, Section};
use crate::layout::Shell;
use crate::shared::notifications::{NotificationService, ToastHost};
use crate::shared::services::AppServices;
use crate::site::LandingPage;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersListPage;

/// Page for an admin section
fn section_view(section: Section) -> AnyView {
    match section {
        Section::Site => view! { <LandingPage /> }.into_any(),
        Section::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Section::Entity(kind) => match kind {
            EntityKind::Category => view! { <CategoryList /> }.into_any(),
            EntityKind::Technology => view! { <TechnologyList /> }.into_any(),
            EntityKind::Service => view! { <ServiceList /> }.into_any(),
            EntityKind::Testimonial => view! { <TestimonialList /> }.into_any(),
            EntityKind::InquiryType => view! { <InquiryTypeList /> }.into_any(),
            EntityKind::Project => view! { <ProjectList /> }.into_any(),
            EntityKind::Contact => view! { <ContactList /> }.into_any(),
            EntityKind::User => view! { <UsersListPage /> }.into_any(),
        },
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Shell>
            {move || section_view(ctx.section.get())}
        </Shell>
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();

    move || {
        if ctx.section.get().requires_auth() {
            view! {
                <RequireAuth fallback=|| view! { <LoginPage /> }>
                    <MainLayout />
                </RequireAuth>
            }
            .into_any()
        } else {
            view! { <LandingPage /> }.into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    let services = AppServices::new(config);
    provide_context(services.clone());

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config.ui.default_locale);
    provide_context(ctx);
    ctx.init_router_integration();
    ctx.init_document_direction();

    provide_context(NotificationService::new(config.notifications.timeout_ms));

    // Outgoing requests carry the active locale as Accept-Language
    let session = services.session.clone();
    Effect::new(move |_| session.set_locale(ctx.locale.get()));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastHost />
    }
}
