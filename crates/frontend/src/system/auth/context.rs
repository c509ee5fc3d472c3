use contracts::system::auth::AuthSession;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::ApiError;
use crate::shared::services::use_services;

/// Reactive mirror of the session owned by `SessionManager`
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: RwSignal<AuthSession>,
    /// `true` until the startup restore has finished
    pub restoring: RwSignal<bool>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .with(|s| s.user.as_ref().map(|u| u.is_admin()).unwrap_or(false))
    }

    pub fn user_name(&self) -> Option<String> {
        self.session.with(|s| s.user.as_ref().map(|u| u.name.clone()))
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let services = use_services();
    let state = AuthState {
        session: RwSignal::new(services.session.snapshot()),
        restoring: RwSignal::new(true),
    };

    let session_signal = state.session;
    services
        .session
        .subscribe(move |session| session_signal.set(session.clone()));

    // Try to restore the session from localStorage on mount
    let session = services.session.clone();
    let restoring = state.restoring;
    spawn_local(async move {
        match session.init().await {
            Ok(user) => log::info!("session restored for {}", user.email),
            Err(ApiError::NotAuthenticated) => log::debug!("no stored session"),
            Err(e) => log::warn!("session restore failed: {}", e),
        }
        restoring.set(false);
    });

    provide_context(state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthProvider not found in component tree")
}

/// Sign out on the backend (best effort) and drop every cached page
pub fn do_logout() {
    let services = use_services();
    spawn_local(async move {
        services.session.logout().await;
        services.cache.clear();
    });
}
