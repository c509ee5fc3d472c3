//! Turns a typed `ListQuery` into a backend call and whatever the backend
//! returns into a uniform `Paginated<E>`.
//!
//! Two response families are accepted:
//! - already paginated `{data: [..], meta: {..}}` (possibly inside the
//!   `{status, message, data}` envelope), passed through with only the
//!   meta fields the backend left out derived;
//! - flat arrays at several nesting depths, searched and paginated here.

use contracts::domain::common::Entity;
use contracts::shared::pagination::{Paginated, RawPaginationMeta};
use contracts::shared::query::ListQuery;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::shared::api_client::{decode, ApiClient, ApiError, HttpTransport};
use crate::shared::api_utils::{collection_path, item_path};
use crate::shared::query_cache::{QueryCache, QueryKey};
use crate::system::auth::session::TokenStore;

/// How deep `data` wrappers are unwrapped before giving up
const MAX_NESTING: u8 = 3;

enum Shape {
    Paginated { data: Value, meta: RawPaginationMeta },
    Flat(Vec<Value>),
}

fn collection_keys(collection: &str) -> [String; 3] {
    let mut camel = String::with_capacity(collection.len());
    let mut upper = false;
    for c in collection.chars() {
        if c == '-' || c == '_' {
            upper = true;
        } else if upper {
            camel.extend(c.to_uppercase());
            upper = false;
        } else {
            camel.push(c);
        }
    }
    [
        collection.to_string(),
        camel,
        collection.replace('-', "_"),
    ]
}

fn take_collection(mut map: Map<String, Value>, collection: &str) -> Option<Vec<Value>> {
    for key in collection_keys(collection) {
        if let Some(Value::Array(items)) = map.remove(&key) {
            return Some(items);
        }
    }
    // A single array-valued field is the collection whatever it is called
    let mut arrays = map.into_iter().filter_map(|(_, v)| match v {
        Value::Array(items) => Some(items),
        _ => None,
    });
    match (arrays.next(), arrays.next()) {
        (Some(items), None) => Some(items),
        _ => None,
    }
}

fn classify(value: Value, collection: &str, depth: u8) -> Result<Shape, ApiError> {
    match value {
        Value::Array(items) => Ok(Shape::Flat(items)),
        Value::Object(mut map) => {
            let paginated = matches!(map.get("data"), Some(Value::Array(_)))
                && matches!(map.get("meta"), Some(Value::Object(_)));
            if paginated {
                let meta = map.remove("meta").unwrap_or(Value::Null);
                let data = map.remove("data").unwrap_or(Value::Null);
                return Ok(Shape::Paginated {
                    data,
                    meta: decode(meta)?,
                });
            }
            if depth == 0 {
                return Err(ApiError::Decode("response nested too deeply".into()));
            }
            if let Some(inner) = map.remove("data") {
                return classify(inner, collection, depth - 1);
            }
            take_collection(map, collection)
                .map(Shape::Flat)
                .ok_or_else(|| ApiError::Decode(format!("no `{}` collection in response", collection)))
        }
        other => Err(ApiError::Decode(format!(
            "expected a collection, got {}",
            match other {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                _ => "a string",
            }
        ))),
    }
}

/// Normalize a decoded response body into `Paginated<E>`
pub fn normalize<E>(raw: Value, query: &ListQuery) -> Result<Paginated<E>, ApiError>
where
    E: Entity + DeserializeOwned,
{
    match classify(raw, E::collection_name(), MAX_NESTING)? {
        Shape::Paginated { data, meta } => {
            let mut data: Vec<E> = decode(data)?;
            if meta.limit > 0 && data.len() > meta.limit as usize {
                log::warn!(
                    "{}: backend sent {} rows for limit {}",
                    E::collection_name(),
                    data.len(),
                    meta.limit
                );
                data.truncate(meta.limit as usize);
            }
            let total = meta.total.max(data.len() as u64);
            Ok(Paginated {
                data,
                meta: RawPaginationMeta { total, ..meta }.resolve(),
            })
        }
        Shape::Flat(items) => {
            let records: Vec<E> = decode(Value::Array(items))?;
            let matching: Vec<E> = records
                .into_iter()
                .filter(|record| record.matches_search(&query.search))
                .collect();
            Ok(Paginated::from_slice(matching, query.page, query.limit))
        }
    }
}

/// Fetch one page of `E`, serving it from the cache while it is valid
pub async fn fetch_list<E, T, S>(
    client: &ApiClient<T, S>,
    cache: &QueryCache,
    query: &ListQuery,
) -> Result<Paginated<E>, ApiError>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
    T: HttpTransport,
    S: TokenStore,
{
    let key = QueryKey::list(E::KIND, client.session().locale(), &query.cache_fragment());
    if let Some(hit) = cache.get::<Paginated<E>>(&key) {
        log::debug!("cache hit {}", key);
        return Ok(hit);
    }

    let raw = client
        .get(&collection_path(E::collection_name()), &query.to_query_pairs())
        .await?;
    let page = normalize::<E>(raw, query)?;
    log::debug!(
        "{}: {} of {} rows (page {}/{})",
        E::collection_name(),
        page.data.len(),
        page.meta.total,
        page.meta.page,
        page.meta.total_pages
    );
    cache.insert(key, page.clone());
    Ok(page)
}

/// Fetch a single record through the detail cache entry
pub async fn fetch_one<E, T, S>(
    client: &ApiClient<T, S>,
    cache: &QueryCache,
    id: &str,
) -> Result<E, ApiError>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
    T: HttpTransport,
    S: TokenStore,
{
    let key = QueryKey::detail(E::KIND, id, client.session().locale());
    if let Some(hit) = cache.get::<E>(&key) {
        return Ok(hit);
    }
    let raw = client.get(&item_path(E::collection_name(), id), &[]).await?;
    let record: E = decode(raw)?;
    cache.insert(key, record.clone());
    Ok(record)
}

/// Every record of `E` on one page, for option lists and public sections
pub async fn fetch_options<E, T, S>(
    client: &ApiClient<T, S>,
    cache: &QueryCache,
    query: ListQuery,
) -> Result<Vec<E>, ApiError>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
    T: HttpTransport,
    S: TokenStore,
{
    fetch_list::<E, T, S>(client, cache, &query)
        .await
        .map(|page| page.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::decode_response;
    use crate::shared::test_support::{anonymous_session, json_response, ScriptedTransport};
    use contracts::domain::a001_category::Category;
    use contracts::domain::a006_project::Project;
    use contracts::enums::EntityKind;
    use contracts::shared::locale::Locale;
    use futures::executor::block_on;
    use serde_json::json;

    fn categories(count: usize) -> Value {
        Value::Array(
            (0..count)
                .map(|i| {
                    json!({
                        "id": i,
                        "slug": format!("cat-{}", i),
                        "translations": [{"locale": "en", "name": format!("Category {}", i)}]
                    })
                })
                .collect(),
        )
    }

    fn ids(page: &Paginated<Category>) -> Vec<String> {
        page.data.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_flat_search_without_matches() {
        let mut query = ListQuery::default();
        query.set_search("foo");
        let page = normalize::<Category>(categories(12), &query).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.limit, 10);
        assert_eq!(page.meta.total_pages, 0);
        assert!(!page.meta.is_next_page);
    }

    #[test]
    fn test_flat_second_page() {
        let mut query = ListQuery::default();
        query.set_page(2);
        let page = normalize::<Category>(categories(23), &query).unwrap();
        let expected: Vec<String> = (10..20).map(|i| i.to_string()).collect();
        assert_eq!(ids(&page), expected);
        assert_eq!(page.meta.total, 23);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.is_next_page);
        assert!(page.meta.is_prev_page);
    }

    #[test]
    fn test_flat_search_is_case_insensitive() {
        let mut query = ListQuery::default();
        query.set_search("CATEGORY 1");
        let page = normalize::<Category>(categories(12), &query).unwrap();
        // "Category 1", "Category 10", "Category 11"
        assert_eq!(page.meta.total, 3);
    }

    #[test]
    fn test_nested_flat_shapes() {
        let query = ListQuery::default();
        let wrapped = json!({"data": categories(3)});
        assert_eq!(normalize::<Category>(wrapped, &query).unwrap().meta.total, 3);

        let double = json!({"data": {"data": categories(4)}});
        assert_eq!(normalize::<Category>(double, &query).unwrap().meta.total, 4);

        let keyed = json!({"data": {"data": {"categories": categories(5)}}});
        assert_eq!(normalize::<Category>(keyed, &query).unwrap().meta.total, 5);
    }

    #[test]
    fn test_camel_case_collection_key() {
        let raw = json!({"data": {"projects": [], "inquiryTypes": []}});
        assert!(normalize::<Project>(raw, &ListQuery::default()).is_ok());
        assert_eq!(collection_keys("inquiry-types")[1], "inquiryTypes");
    }

    #[test]
    fn test_paginated_passthrough_derives_flags() {
        let raw = json!({
            "data": categories(5),
            "meta": {"total": 25, "page": 3, "limit": 10}
        });
        let page = normalize::<Category>(raw, &ListQuery::default()).unwrap();
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.is_prev_page);
        assert!(!page.meta.is_next_page);
    }

    #[test]
    fn test_paginated_backend_flags_win() {
        let raw = json!({
            "data": categories(10),
            "meta": {"total": 10, "page": 1, "limit": 10, "totalPages": 2, "isNextPage": true}
        });
        let page = normalize::<Category>(raw, &ListQuery::default()).unwrap();
        assert_eq!(page.meta.total_pages, 2);
        assert!(page.meta.is_next_page);
        assert!(!page.meta.is_prev_page);
    }

    #[test]
    fn test_enveloped_page_keeps_sibling_meta() {
        let body = json!({
            "status": "success",
            "message": "ok",
            "data": categories(10),
            "meta": {"total": 25, "page": 1, "limit": 10, "totalPages": 3, "isNextPage": true, "isPrevPage": false}
        })
        .to_string();
        let raw = decode_response(json_response(200, &body)).unwrap();
        let page = normalize::<Category>(raw, &ListQuery::default()).unwrap();
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.is_next_page);
    }

    #[test]
    fn test_paginated_rows_never_exceed_limit() {
        let raw = json!({"data": categories(12), "meta": {"total": 2, "page": 1, "limit": 10}});
        let page = normalize::<Category>(raw, &ListQuery::default()).unwrap();
        assert_eq!(page.data.len(), 10);
        assert!(page.meta.total >= page.data.len() as u64);
    }

    #[test]
    fn test_unsupported_shapes() {
        let query = ListQuery::default();
        assert!(matches!(
            normalize::<Category>(Value::Null, &query),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            normalize::<Category>(json!({"count": 3}), &query),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            normalize::<Category>(json!([{"slug": "no-id"}]), &query),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_fetch_list_uses_cache_until_invalidated() {
        let body = json!({"status": "success", "data": categories(3)}).to_string();
        let transport = ScriptedTransport::new(vec![
            json_response(200, &body),
            json_response(200, &body),
        ]);
        let client = ApiClient::new(anonymous_session(transport.clone()));
        let cache = QueryCache::new();
        let query = ListQuery::default().with_filter("isActive", true);

        let first = block_on(fetch_list::<Category, _, _>(&client, &cache, &query)).unwrap();
        let cached = block_on(fetch_list::<Category, _, _>(&client, &cache, &query)).unwrap();
        assert_eq!(first, cached);
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/categories?page=1&limit=10&isActive=true"
        );

        // A no-op update invalidates; the refetch is equivalent
        cache.invalidate_prefix(&QueryKey::list_prefix(EntityKind::Category));
        let refetched = block_on(fetch_list::<Category, _, _>(&client, &cache, &query)).unwrap();
        assert_eq!(first, refetched);
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_fetch_one_reads_detail() {
        let transport = ScriptedTransport::new(vec![json_response(
            200,
            r#"{"status":"success","message":"ok","data":{"id":7,"slug":"web"}}"#,
        )]);
        let client = ApiClient::new(anonymous_session(transport.clone()));
        let cache = QueryCache::new();

        let category: Category = block_on(fetch_one(&client, &cache, "7")).unwrap();
        assert_eq!(category.slug, "web");
        assert!(transport.requests()[0].url.ends_with("/api/categories/7"));
        assert!(cache.contains(&QueryKey::detail(EntityKind::Category, "7", Locale::En)));
    }

    #[test]
    fn test_locale_switch_fetches_again() {
        let transport = ScriptedTransport::new(vec![
            json_response(200, &categories(2).to_string()),
            json_response(200, &categories(2).to_string()),
        ]);
        let session = anonymous_session(transport.clone());
        let client = ApiClient::new(session.clone());
        let cache = QueryCache::new();
        let query = ListQuery::default();

        block_on(fetch_list::<Category, _, _>(&client, &cache, &query)).unwrap();
        session.set_locale(Locale::Ar);
        block_on(fetch_list::<Category, _, _>(&client, &cache, &query)).unwrap();
        block_on(fetch_list::<Category, _, _>(&client, &cache, &query)).unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].header("Accept-Language"), Some("ar"));
        let fragment = query.cache_fragment();
        assert!(cache.contains(&QueryKey::list(EntityKind::Category, Locale::En, &fragment)));
        assert!(cache.contains(&QueryKey::list(EntityKind::Category, Locale::Ar, &fragment)));
    }
}
