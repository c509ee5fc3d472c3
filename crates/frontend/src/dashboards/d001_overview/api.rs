use contracts::domain::common::Entity;
use contracts::shared::query::{FilterValue, ListQuery};
use serde::de::DeserializeOwned;

use crate::shared::api_client::{ApiClient, ApiError, HttpTransport};
use crate::shared::query_cache::QueryCache;
use crate::shared::resource_adapter::fetch_list;
use crate::system::auth::session::TokenStore;

/// Smallest page that still carries the collection total
pub fn count_query(filter: Option<(&str, FilterValue)>) -> ListQuery {
    let query = ListQuery::with_limit(1);
    match filter {
        Some((key, value)) => query.with_filter(key, value),
        None => query,
    }
}

/// Number of `E` records matching `query`, read from the pagination meta
pub async fn count<E, T, S>(
    client: &ApiClient<T, S>,
    cache: &QueryCache,
    query: &ListQuery,
) -> Result<u64, ApiError>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
    T: HttpTransport,
    S: TokenStore,
{
    fetch_list::<E, T, S>(client, cache, query)
        .await
        .map(|page| page.meta.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{json_response, session_with_tokens, ScriptedTransport};
    use contracts::domain::a007_contact::Contact;
    use futures::executor::block_on;

    #[test]
    fn test_count_reads_meta_total() {
        let transport = ScriptedTransport::new(vec![json_response(
            200,
            r#"{"status":"success","data":[{"id":1,"name":"A","email":"a@x.io","message":"hello there"}],
                "meta":{"total":17,"page":1,"limit":1}}"#,
        )]);
        let client = ApiClient::new(session_with_tokens(transport.clone(), "access", "refresh"));
        let cache = QueryCache::new();
        let query = count_query(Some(("status", FilterValue::Text("new".into()))));

        let total = block_on(count::<Contact, _, _>(&client, &cache, &query)).unwrap();
        assert_eq!(total, 17);
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/contacts?page=1&limit=1&status=new"
        );
    }

    #[test]
    fn test_count_of_flat_collection() {
        let transport = ScriptedTransport::new(vec![json_response(
            200,
            r#"[{"id":1,"name":"A","email":"a@x.io"},{"id":2,"name":"B","email":"b@x.io"}]"#,
        )]);
        let client = ApiClient::new(session_with_tokens(transport, "access", "refresh"));
        let total = block_on(count::<Contact, _, _>(&client, &QueryCache::new(), &count_query(None))).unwrap();
        assert_eq!(total, 2);
    }
}
