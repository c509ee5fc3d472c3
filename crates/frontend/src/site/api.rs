use contracts::domain::a007_contact::ContactDto;
use contracts::enums::EntityKind;
use contracts::shared::query::ListQuery;

use crate::shared::api_client::{ApiClient, ApiError, HttpTransport};
use crate::shared::api_utils::collection_path;
use crate::shared::collection::options_query;
use crate::shared::mutation::invalidate_entity;
use crate::shared::query_cache::QueryCache;
use crate::system::auth::session::TokenStore;

/// Records visitors may see: active ones, optionally only the featured
pub fn public_query(featured_only: bool) -> ListQuery {
    let query = options_query("orderIndex").with_filter("isActive", true);
    if featured_only {
        query.with_filter("isFeatured", true)
    } else {
        query
    }
}

/// `POST /api/contacts` with an already validated payload
pub async fn submit_contact<T, S>(
    client: &ApiClient<T, S>,
    cache: &QueryCache,
    dto: &ContactDto,
) -> Result<(), ApiError>
where
    T: HttpTransport,
    S: TokenStore,
{
    client
        .post(&collection_path(EntityKind::Contact.collection()), dto)
        .await?;
    invalidate_entity(cache, EntityKind::Contact, None);
    log::info!("contact message submitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::HttpMethod;
    use crate::shared::test_support::{anonymous_session, json_response, ScriptedTransport};
    use futures::executor::block_on;

    #[test]
    fn test_public_query_filters() {
        let pairs = public_query(true).to_query_pairs();
        assert!(pairs.contains(&("isActive".to_string(), "true".to_string())));
        assert!(pairs.contains(&("isFeatured".to_string(), "true".to_string())));
        assert!(!public_query(false)
            .to_query_pairs()
            .iter()
            .any(|(k, _)| k == "isFeatured"));
    }

    #[test]
    fn test_submit_contact_posts_payload() {
        let transport = ScriptedTransport::new(vec![json_response(
            201,
            r#"{"status":"success","message":"received","data":{"id":5}}"#,
        )]);
        let client = ApiClient::new(anonymous_session(transport.clone()));
        let dto = ContactDto {
            name: "Lina".into(),
            email: "lina@example.com".into(),
            message: "We need a new website".into(),
            ..ContactDto::default()
        };

        block_on(submit_contact(&client, &QueryCache::new(), &dto)).unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://api.test/api/contacts");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "lina@example.com");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_submit_contact_surfaces_backend_message() {
        let transport = ScriptedTransport::new(vec![json_response(
            422,
            r#"{"status":"error","message":"Email is blocked"}"#,
        )]);
        let client = ApiClient::new(anonymous_session(transport));
        let err = block_on(submit_contact(&client, &QueryCache::new(), &ContactDto::default())).unwrap_err();
        assert_eq!(err.backend_message(), Some("Email is blocked"));
    }
}
