//! Create / update / delete through one path: send, invalidate the cached
//! pages of the entity, then report the outcome with a single notification.

use contracts::enums::EntityKind;
use contracts::shared::locale::Locale;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_client::{encode, ApiClient, ApiError, HttpMethod, HttpTransport};
use crate::shared::api_utils::{collection_path, item_path};
use crate::shared::i18n::Msg;
use crate::shared::notifications::{Notifier, ToastIntent};
use crate::shared::query_cache::{QueryCache, QueryKey};
use crate::system::auth::session::TokenStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    /// Partial update of a status field
    Status,
}

impl MutationKind {
    pub fn success_message(&self, entity: EntityKind, locale: Locale) -> String {
        let element = entity.element_name(locale);
        match self {
            MutationKind::Create => Msg::CreatedSuccess.format(locale, element),
            MutationKind::Update => Msg::UpdatedSuccess.format(locale, element),
            MutationKind::Delete => Msg::DeletedSuccess.format(locale, element),
            MutationKind::Status => Msg::StatusUpdated.text(locale).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub entity: EntityKind,
    pub kind: MutationKind,
    pub id: Option<String>,
    pub body: Option<Value>,
}

impl Mutation {
    pub fn create<B: Serialize>(entity: EntityKind, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            entity,
            kind: MutationKind::Create,
            id: None,
            body: Some(encode(body)?),
        })
    }

    pub fn update<B: Serialize>(entity: EntityKind, id: &str, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            entity,
            kind: MutationKind::Update,
            id: Some(id.to_string()),
            body: Some(encode(body)?),
        })
    }

    /// Create when `id` is `None`, update otherwise
    pub fn save<B: Serialize>(
        entity: EntityKind,
        id: Option<&str>,
        body: &B,
    ) -> Result<Self, ApiError> {
        match id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Self::update(entity, id, body),
            None => Self::create(entity, body),
        }
    }

    pub fn status<B: Serialize>(entity: EntityKind, id: &str, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            entity,
            kind: MutationKind::Status,
            id: Some(id.to_string()),
            body: Some(encode(body)?),
        })
    }

    pub fn delete(entity: EntityKind, id: &str) -> Self {
        Self {
            entity,
            kind: MutationKind::Delete,
            id: Some(id.to_string()),
            body: None,
        }
    }

    fn method(&self) -> HttpMethod {
        match self.kind {
            MutationKind::Create => HttpMethod::Post,
            MutationKind::Update => HttpMethod::Put,
            MutationKind::Status => HttpMethod::Patch,
            MutationKind::Delete => HttpMethod::Delete,
        }
    }

    fn path(&self) -> String {
        match &self.id {
            Some(id) => item_path(self.entity.collection(), id),
            None => collection_path(self.entity.collection()),
        }
    }
}

/// Drop every cached page of `entity` and the record `id`, in all locales
pub fn invalidate_entity(cache: &QueryCache, entity: EntityKind, id: Option<&str>) {
    let pages = cache.invalidate_prefix(&QueryKey::list_prefix(entity));
    let detail = id
        .map(|id| cache.invalidate_prefix(&QueryKey::detail_prefix(entity, id)) > 0)
        .unwrap_or(false);
    log::debug!(
        "invalidated {} cached page(s) of {}{}",
        pages,
        entity.code(),
        if detail { " and its detail entry" } else { "" }
    );
}

fn created_id(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Cache invalidation and the one notification for a finished mutation
pub fn settle<N: Notifier + ?Sized>(
    mutation: &Mutation,
    result: &Result<Value, ApiError>,
    cache: &QueryCache,
    notifier: &N,
    locale: Locale,
) {
    match result {
        Ok(value) => {
            let id = mutation.id.clone().or_else(|| created_id(value));
            invalidate_entity(cache, mutation.entity, id.as_deref());
            notifier.notify(
                ToastIntent::Success,
                mutation.kind.success_message(mutation.entity, locale),
            );
        }
        Err(e) => {
            log::error!(
                "{:?} {} failed: {}",
                mutation.kind,
                mutation.entity.code(),
                e
            );
            notifier.notify(ToastIntent::Error, e.user_message(locale));
        }
    }
}

/// Send the mutation and settle it
pub async fn dispatch<T, S, N>(
    client: &ApiClient<T, S>,
    cache: &QueryCache,
    notifier: &N,
    mutation: Mutation,
) -> Result<Value, ApiError>
where
    T: HttpTransport,
    S: TokenStore,
    N: Notifier + ?Sized,
{
    let locale = client.session().locale();
    let result = client
        .execute(mutation.method(), &mutation.path(), &[], mutation.body.clone())
        .await;
    settle(&mutation, &result, cache, notifier, locale);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::RecordingNotifier;
    use crate::shared::test_support::{json_response, session_with_tokens, ScriptedTransport};
    use contracts::domain::a001_category::CategoryDto;
    use futures::executor::block_on;

    fn seeded_cache() -> QueryCache {
        let cache = QueryCache::new();
        cache.insert(QueryKey::list(EntityKind::Category, Locale::En, "page=1&limit=10"), 1u8);
        cache.insert(QueryKey::list(EntityKind::Category, Locale::En, "page=2&limit=10"), 2u8);
        cache.insert(QueryKey::detail(EntityKind::Category, "X", Locale::En), 3u8);
        cache.insert(QueryKey::detail(EntityKind::Category, "X", Locale::Ar), 7u8);
        cache.insert(QueryKey::detail(EntityKind::Category, "Y", Locale::En), 4u8);
        cache.insert(QueryKey::list(EntityKind::Service, Locale::En, "page=1&limit=10"), 5u8);
        cache
    }

    #[test]
    fn test_delete_invalidates_and_notifies_once() {
        let transport = ScriptedTransport::new(vec![json_response(204, "")]);
        let client = ApiClient::new(session_with_tokens(transport.clone(), "a1", "r1"));
        let cache = seeded_cache();
        let notifier = RecordingNotifier::default();

        let result = block_on(dispatch(
            &client,
            &cache,
            &notifier,
            Mutation::delete(EntityKind::Category, "X"),
        ));
        assert!(result.is_ok());

        let sent = transport.requests();
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert!(sent[0].url.ends_with("/api/categories/X"));

        assert!(!cache.contains(&QueryKey::detail(EntityKind::Category, "X", Locale::En)));
        assert!(!cache.contains(&QueryKey::detail(EntityKind::Category, "X", Locale::Ar)));
        assert!(!cache.contains(&QueryKey::list(EntityKind::Category, Locale::En, "page=1&limit=10")));
        assert!(!cache.contains(&QueryKey::list(EntityKind::Category, Locale::En, "page=2&limit=10")));
        assert!(cache.contains(&QueryKey::detail(EntityKind::Category, "Y", Locale::En)));
        assert!(cache.contains(&QueryKey::list(EntityKind::Service, Locale::En, "page=1&limit=10")));

        assert_eq!(
            notifier.events(),
            vec![(ToastIntent::Success, "Category deleted successfully".to_string())]
        );
    }

    #[test]
    fn test_failure_notifies_backend_message_and_keeps_cache() {
        let transport = ScriptedTransport::new(vec![json_response(
            422,
            r#"{"message":"Slug already exists"}"#,
        )]);
        let session = session_with_tokens(transport, "a1", "r1");
        session.set_locale(Locale::Ar);
        let client = ApiClient::new(session);
        let cache = seeded_cache();
        let notifier = RecordingNotifier::default();

        let mut dto = CategoryDto::default();
        dto.slug = "web".into();
        let mutation = Mutation::save(EntityKind::Category, None, &dto).unwrap();
        assert_eq!(mutation.kind, MutationKind::Create);

        let result = block_on(dispatch(&client, &cache, &notifier, mutation));
        assert!(result.is_err());
        assert_eq!(cache.len(), 6);
        assert_eq!(
            notifier.events(),
            vec![(ToastIntent::Error, "Slug already exists".to_string())]
        );
    }

    #[test]
    fn test_generic_failure_is_localized() {
        let transport = ScriptedTransport::new(vec![json_response(500, "")]);
        let session = session_with_tokens(transport, "a1", "r1");
        session.set_locale(Locale::Ar);
        let client = ApiClient::new(session);
        let notifier = RecordingNotifier::default();

        let _ = block_on(dispatch(
            &client,
            &QueryCache::new(),
            &notifier,
            Mutation::delete(EntityKind::Project, "3"),
        ));
        assert_eq!(
            notifier.events(),
            vec![(ToastIntent::Error, "فشل الطلب".to_string())]
        );
    }

    #[test]
    fn test_update_uses_put_and_created_id_is_invalidated() {
        let transport = ScriptedTransport::new(vec![
            json_response(200, r#"{"status":"success","data":{"id":"Y"}}"#),
            json_response(201, r#"{"status":"success","data":{"id":42}}"#),
        ]);
        let client = ApiClient::new(session_with_tokens(transport.clone(), "a1", "r1"));
        let cache = seeded_cache();
        cache.insert(QueryKey::detail(EntityKind::Category, "42", Locale::En), 6u8);
        let notifier = RecordingNotifier::default();
        let dto = CategoryDto::default();

        block_on(dispatch(
            &client,
            &cache,
            &notifier,
            Mutation::save(EntityKind::Category, Some("Y"), &dto).unwrap(),
        ))
        .unwrap();
        assert_eq!(transport.requests()[0].method, HttpMethod::Put);
        assert!(!cache.contains(&QueryKey::detail(EntityKind::Category, "Y", Locale::En)));

        block_on(dispatch(
            &client,
            &cache,
            &notifier,
            Mutation::create(EntityKind::Category, &dto).unwrap(),
        ))
        .unwrap();
        assert!(!cache.contains(&QueryKey::detail(EntityKind::Category, "42", Locale::En)));
        assert_eq!(notifier.events().len(), 2);
    }
}
