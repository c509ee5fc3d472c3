//! Long-lived objects shared by every view: the auth session and the
//! query cache. Both are `Arc`s so they can live in Leptos context.

use leptos::prelude::*;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::shared::api_client::{ApiClient, GlooTransport};
use crate::shared::api_utils::api_base;
use crate::shared::query_cache::QueryCache;
use crate::system::auth::session::SessionManager;
use crate::system::auth::storage::LocalTokenStore;

pub type AppSession = SessionManager<GlooTransport, LocalTokenStore>;
pub type AppClient = ApiClient<GlooTransport, LocalTokenStore>;

#[derive(Clone)]
pub struct AppServices {
    pub session: Arc<AppSession>,
    pub cache: Arc<QueryCache>,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let base = api_base();
        log::info!("API base: {}", base);
        let session = SessionManager::new(GlooTransport, LocalTokenStore, base, config.retry);
        session.set_locale(config.ui.default_locale);
        Self {
            session: Arc::new(session),
            cache: Arc::new(QueryCache::new()),
        }
    }

    pub fn client(&self) -> AppClient {
        ApiClient::new(self.session.clone())
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices not provided in context")
}
