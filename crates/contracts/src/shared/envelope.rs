use serde::{Deserialize, Serialize};

/// Outer wrapper of every backend response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Error body; only `message` is relied upon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Backend message if one is present and not blank
    pub fn best_message(&self) -> Option<&str> {
        non_blank(&self.message).or_else(|| non_blank(&self.error))
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|m| !m.is_empty())
}

/// Unwrap an `{status, message, data}` envelope; bare payloads pass through.
/// An envelope with a sibling `meta` is already a page and is kept whole.
pub fn unwrap_envelope(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map)
            if map.contains_key("data")
                && !map.contains_key("meta")
                && (map.contains_key("status") || map.contains_key("message")) =>
        {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let wrapped = json!({"status": "success", "message": "ok", "data": {"id": "1"}});
        assert_eq!(unwrap_envelope(wrapped), json!({"id": "1"}));

        let bare = json!({"id": "1"});
        assert_eq!(unwrap_envelope(bare.clone()), bare);

        let collection = json!({"data": [1, 2], "meta": {"total": 2}});
        assert_eq!(unwrap_envelope(collection.clone()), collection);
    }

    #[test]
    fn test_envelope_with_meta_is_kept_whole() {
        let page = json!({
            "status": "success",
            "message": "ok",
            "data": [1, 2],
            "meta": {"total": 25, "page": 1, "limit": 2}
        });
        assert_eq!(unwrap_envelope(page.clone()), page);
    }

    #[test]
    fn test_best_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"  Slug taken "}"#).unwrap();
        assert_eq!(body.best_message(), Some("Slug taken"));

        let blank: ApiErrorBody = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(blank.best_message(), None);

        let alt: ApiErrorBody = serde_json::from_str(r#"{"error":"Forbidden"}"#).unwrap();
        assert_eq!(alt.best_message(), Some("Forbidden"));

        let blank_then_error: ApiErrorBody =
            serde_json::from_str(r#"{"message":"  ","error":"Invalid credentials"}"#).unwrap();
        assert_eq!(blank_then_error.best_message(), Some("Invalid credentials"));
    }
}
