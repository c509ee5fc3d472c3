//! HTTP plumbing shared by every backend call.
//!
//! Requests go through the [`HttpTransport`] seam so the request/refresh
//! logic runs unchanged in the browser (gloo-net) and in unit tests.

use contracts::shared::envelope::{unwrap_envelope, ApiErrorBody};
use contracts::shared::locale::Locale;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use crate::shared::api_utils::build_url;
use crate::shared::i18n::Msg;
use crate::system::auth::session::{SessionManager, TokenStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and reports transport failures as plain text
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;

    /// Sleep between retries
    async fn pause(&self, ms: u32);
}

/// Browser transport backed by `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Failed to build request: {}", e))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;
        Ok(HttpResponse { status, body })
    }

    async fn pause(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Backend { status: u16, message: Option<String> },
    #[error("session expired")]
    Unauthorized,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not signed in")]
    NotAuthenticated,
}

impl ApiError {
    /// Message supplied by the backend, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Text shown to the user: the backend message or a localized fallback
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            ApiError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Unauthorized => Msg::SessionExpired.text(locale).to_string(),
            ApiError::NotAuthenticated => Msg::SignInRequired.text(locale).to_string(),
            ApiError::Network(_) => Msg::NetworkError.text(locale).to_string(),
            _ => Msg::RequestFailed.text(locale).to_string(),
        }
    }
}

/// `Backend` error carrying the message from the response body, if any
pub fn backend_error(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.best_message().map(str::to_string));
    ApiError::Backend {
        status: response.status,
        message,
    }
}

/// Status check, error-body extraction and envelope unwrapping
pub fn decode_response(response: HttpResponse) -> Result<Value, ApiError> {
    if response.status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        return Err(backend_error(&response));
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    let value: Value =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(unwrap_envelope(value))
}

pub fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Authorized JSON client. A 401 triggers one token refresh and one replay.
pub struct ApiClient<T: HttpTransport, S: TokenStore> {
    session: Arc<SessionManager<T, S>>,
}

impl<T: HttpTransport, S: TokenStore> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}

impl<T: HttpTransport, S: TokenStore> ApiClient<T, S> {
    pub fn new(session: Arc<SessionManager<T, S>>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &SessionManager<T, S> {
        &self.session
    }

    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Get, path, query, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Post, path, &[], Some(encode(body)?))
            .await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Put, path, &[], Some(encode(body)?))
            .await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Patch, path, &[], Some(encode(body)?))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Delete, path, &[], None).await
    }

    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = build_url(self.session.base_url(), path, query);
        let body = body.map(|b| b.to_string());
        log::debug!("{} {}", method.as_str(), url);

        let response = self.session.send(method, &url, body.clone()).await?;
        if response.status != 401 {
            return decode_response(response);
        }

        log::warn!("{} {} returned 401; refreshing session", method.as_str(), url);
        self.session.refresh().await?;
        let replay = self.session.send(method, &url, body).await?;
        if replay.status == 401 {
            log::warn!("replay of {} still unauthorized", url);
            self.session.teardown();
            return Err(ApiError::Unauthorized);
        }
        decode_response(replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{json_response, session_with_tokens, ScriptedTransport};
    use futures::executor::block_on;

    #[test]
    fn test_decode_unwraps_envelope() {
        let value = decode_response(json_response(
            200,
            r#"{"status":"success","message":"ok","data":{"id":1}}"#,
        ))
        .unwrap();
        assert_eq!(value, serde_json::json!({"id": 1}));
    }

    #[test]
    fn test_decode_backend_message_and_fallback() {
        let err = decode_response(json_response(409, r#"{"message":"Slug already exists"}"#))
            .unwrap_err();
        assert_eq!(err.backend_message(), Some("Slug already exists"));
        assert_eq!(err.user_message(Locale::Ar), "Slug already exists");

        let err = decode_response(json_response(500, "<html>oops</html>")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Backend {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message(Locale::En), "Request failed");
    }

    #[test]
    fn test_decode_empty_and_invalid_bodies() {
        assert_eq!(decode_response(json_response(204, "")).unwrap(), Value::Null);
        assert!(matches!(
            decode_response(json_response(200, "{not json")),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_headers_carry_token_and_locale() {
        let transport = ScriptedTransport::new(vec![json_response(200, "[]")]);
        let session = session_with_tokens(transport.clone(), "a1", "r1");
        session.set_locale(Locale::Ar);
        let client = ApiClient::new(session);

        block_on(client.get("/api/categories", &[("page".into(), "1".into())])).unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://api.test/api/categories?page=1");
        assert_eq!(sent[0].header("Authorization"), Some("Bearer a1"));
        assert_eq!(sent[0].header("Accept-Language"), Some("ar"));
    }

    #[test]
    fn test_401_refreshes_then_replays_once() {
        let transport = ScriptedTransport::new(vec![
            json_response(401, ""),
            json_response(200, r#"{"accessToken":"a2"}"#),
            json_response(200, r#"{"data":[{"id":1}]}"#),
        ]);
        let session = session_with_tokens(transport.clone(), "a1", "r1");
        let client = ApiClient::new(session.clone());

        let value = block_on(client.get("/api/services", &[])).unwrap();
        assert_eq!(value, serde_json::json!({"data":[{"id":1}]}));

        let sent = transport.requests();
        assert_eq!(sent.len(), 3);
        assert!(sent[1].url.ends_with("/api/auth/refresh"));
        assert_eq!(sent[2].header("Authorization"), Some("Bearer a2"));
        assert_eq!(session.snapshot().refresh_token.as_deref(), Some("r1"));
    }

    #[test]
    fn test_failed_refresh_tears_down() {
        let transport = ScriptedTransport::new(vec![
            json_response(401, ""),
            json_response(401, r#"{"message":"expired"}"#),
        ]);
        let session = session_with_tokens(transport.clone(), "a1", "r1");
        let client = ApiClient::new(session.clone());

        let err = block_on(client.delete("/api/users/3")).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(transport.requests().len(), 2);
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn test_network_failure() {
        let transport = ScriptedTransport::with_results(vec![Err("connection refused".into())]);
        let session = session_with_tokens(transport, "a1", "r1");
        let client = ApiClient::new(session);

        let err = block_on(client.get("/api/projects", &[])).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.user_message(Locale::En), "Network error, check your connection");
    }
}
