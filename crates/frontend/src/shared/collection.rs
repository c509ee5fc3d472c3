//! Remote collection bound to a `ListState`: every query or locale change
//! (or an explicit reload) fetches the current page through the resource
//! adapter.

use contracts::domain::common::Entity;
use contracts::shared::locale::Locale;
use contracts::shared::pagination::{Paginated, PaginationMeta};
use contracts::shared::query::{ListQuery, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::list_state::ListState;
use crate::shared::resource_adapter::{fetch_list, fetch_options};
use crate::shared::services::AppServices;

pub struct RemoteCollection<E: Send + Sync + 'static> {
    pub state: ListState,
    pub page: RwSignal<Paginated<E>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    reloads: RwSignal<u64>,
}

impl<E: Send + Sync + 'static> Clone for RemoteCollection<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for RemoteCollection<E> {}

impl<E> RemoteCollection<E>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Start fetching for `state` and keep following it
    pub fn new(services: AppServices, state: ListState, locale: Signal<Locale>) -> Self {
        let initial = state.query.with_untracked(|q| Paginated::empty(q.page, q.limit));
        let this = Self {
            state,
            page: RwSignal::new(initial),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            reloads: RwSignal::new(0),
        };

        Effect::new(move |_| {
            let query = state.query.get();
            let locale = locale.get();
            this.reloads.track();
            this.fetch(services.clone(), query, locale);
        });

        this
    }

    fn fetch(&self, services: AppServices, query: ListQuery, locale: Locale) {
        let this = *self;
        this.loading.set(true);
        // The page is requested and cached under the locale the view shows
        services.session.set_locale(locale);
        spawn_local(async move {
            let client = services.client();
            let result = fetch_list::<E, _, _>(&client, &services.cache, &query).await;
            // A late response for a query or locale the view has moved away
            // from is only kept in the cache
            if !this.is_current(&query) || services.session.locale() != locale {
                log::debug!("dropping stale {} page", E::collection_name());
                return;
            }
            match result {
                Ok(page) => {
                    this.page.set(page);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("{} fetch failed: {}", E::collection_name(), e);
                    this.error.set(Some(e.user_message(locale)));
                }
            }
            this.loading.set(false);
        });
    }

    fn is_current(&self, query: &ListQuery) -> bool {
        self.state
            .query
            .try_with_untracked(|current| current == query)
            .unwrap_or(false)
    }

    /// Fetch the current query again (after a mutation invalidated it)
    pub fn reload(&self) {
        self.reloads.update(|n| *n += 1);
    }

    pub fn rows(&self) -> Vec<E> {
        self.page.with(|p| p.data.clone())
    }

    pub fn meta(&self) -> Signal<PaginationMeta> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.meta))
    }

    pub fn is_empty(&self) -> bool {
        self.page.with(|p| p.data.is_empty())
    }
}

/// Page size used when a select or public section needs every record
pub const OPTIONS_LIMIT: u32 = 100;

/// Query for option lists, ordered the way the admin orders them
pub fn options_query(sort_by: &str) -> ListQuery {
    ListQuery::with_limit(OPTIONS_LIMIT).sorted_by(sort_by, SortOrder::Asc)
}

/// Records of `E` for selects and public sections, loaded once
pub fn load_options<E>(services: AppServices, query: ListQuery) -> RwSignal<Vec<E>>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let items = RwSignal::new(Vec::new());
    spawn_local(async move {
        let client = services.client();
        match fetch_options::<E, _, _>(&client, &services.cache, query).await {
            Ok(records) => items.set(records),
            Err(e) => log::warn!("{} options unavailable: {}", E::collection_name(), e),
        }
    });
    items
}

/// `(id, localized name)` pairs for a `<select>`
pub fn option_pairs<E: Entity>(items: &[E], locale: Locale) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| (item.id().to_string(), item.display_name(locale)))
        .collect()
}
