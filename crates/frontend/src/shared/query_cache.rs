//! In-memory cache of fetched collection pages and single records.
//!
//! Keys are segment lists; invalidation works on exact keys and on prefixes,
//! so a mutation can drop every cached page of one entity at once. Pages and
//! records are stored per locale, since the backend localizes them from
//! `Accept-Language`. The cache holds at most `capacity` entries and evicts
//! the least recently used one beyond that.

use contracts::enums::EntityKind;
use contracts::shared::locale::Locale;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

pub const ENTITY_SCOPE: &str = "entity-list";
const LIST_SEGMENT: &str = "list";
const ITEM_SEGMENT: &str = "item";

/// Default entry limit; covers many pages of every collection
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, V>(segments: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// `["entity-list", <entity>, "list", <locale>, <query fragment>]`
    pub fn list(kind: EntityKind, locale: Locale, fragment: &str) -> Self {
        Self::new([ENTITY_SCOPE, kind.code(), LIST_SEGMENT, locale.code(), fragment])
    }

    /// Prefix of every cached page of `kind`
    pub fn list_prefix(kind: EntityKind) -> Self {
        Self::new([ENTITY_SCOPE, kind.code(), LIST_SEGMENT])
    }

    /// `["entity-list", <entity>, "item", <id>, <locale>]`
    pub fn detail(kind: EntityKind, id: &str, locale: Locale) -> Self {
        Self::new([ENTITY_SCOPE, kind.code(), ITEM_SEGMENT, id, locale.code()])
    }

    /// Prefix of the record `id` in every locale
    pub fn detail_prefix(kind: EntityKind, id: &str) -> Self {
        Self::new([ENTITY_SCOPE, kind.code(), ITEM_SEGMENT, id])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    last_used: u64,
}

pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    capacity: usize,
    clock: AtomicU64,
    revision: AtomicU64,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
            clock: AtomicU64::new(0),
            revision: AtomicU64::new(0),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::SeqCst)
    }

    /// Cached value under `key`, if one of type `V` is present
    pub fn get<V: Clone + 'static>(&self, key: &QueryKey) -> Option<V> {
        let now = self.tick();
        let mut entries = self.entries();
        let entry = entries.get_mut(key)?;
        let value = entry.value.downcast_ref::<V>().cloned()?;
        entry.last_used = now;
        Some(value)
    }

    pub fn insert<V: Send + Sync + 'static>(&self, key: QueryKey, value: V) {
        let now = self.tick();
        let mut entries = self.entries();
        entries.insert(
            key,
            Entry {
                value: Arc::new(value),
                last_used: now,
            },
        );
        while entries.len() > self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    log::debug!("cache full; evicting {}", key);
                    entries.remove(&key);
                }
                None => break,
            }
        }
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn invalidate(&self, key: &QueryKey) -> bool {
        let removed = self.entries().remove(key).is_some();
        if removed {
            self.bump();
        }
        removed
    }

    /// Drop every entry whose key starts with `prefix`; returns how many went
    pub fn invalidate_prefix(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        drop(entries);
        if removed > 0 {
            self.bump();
        }
        removed
    }

    pub fn clear(&self) {
        self.entries().clear();
        self.bump();
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    /// Increases whenever entries are invalidated
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}
