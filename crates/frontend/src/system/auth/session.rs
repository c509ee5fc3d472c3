//! Client-side auth session: tokens, the signed-in user and the
//! login / refresh / logout transitions.

use contracts::shared::locale::Locale;
use contracts::system::auth::{
    AuthSession, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use std::sync::{Mutex, MutexGuard};

use crate::shared::api_client::{
    backend_error, decode, decode_response, encode, ApiError, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport,
};
use crate::shared::retry::RetryPolicy;

const LOGIN_PATH: &str = "/api/auth/login";
const REFRESH_PATH: &str = "/api/auth/refresh";
const LOGOUT_PATH: &str = "/api/auth/logout";
const ME_PATH: &str = "/api/auth/me";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Where tokens survive a page reload
pub trait TokenStore {
    fn load(&self) -> StoredTokens;
    fn save(&self, tokens: &StoredTokens);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<StoredTokens>,
}

impl MemoryTokenStore {
    pub fn new(tokens: StoredTokens) -> Self {
        Self {
            tokens: Mutex::new(tokens),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> StoredTokens {
        lock(&self.tokens).clone()
    }

    fn save(&self, tokens: &StoredTokens) {
        *lock(&self.tokens) = tokens.clone();
    }

    fn clear(&self) {
        *lock(&self.tokens) = StoredTokens::default();
    }
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

type Listener = Box<dyn Fn(&AuthSession) + Send + Sync>;

/// Owns the auth session and every transition of it. Shared by the API
/// client (refresh on 401) and the UI (login form, logout button).
pub struct SessionManager<T: HttpTransport, S: TokenStore> {
    transport: T,
    store: S,
    base_url: String,
    retry: RetryPolicy,
    locale: Mutex<Locale>,
    state: Mutex<AuthSession>,
    listeners: Mutex<Vec<Listener>>,
}

impl<T: HttpTransport, S: TokenStore> SessionManager<T, S> {
    pub fn new(transport: T, store: S, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            transport,
            store,
            base_url: base_url.into(),
            retry,
            locale: Mutex::new(Locale::default()),
            state: Mutex::new(AuthSession::default()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn locale(&self) -> Locale {
        *lock(&self.locale)
    }

    /// Locale sent as `Accept-Language`
    pub fn set_locale(&self, locale: Locale) {
        *lock(&self.locale) = locale;
    }

    pub fn snapshot(&self) -> AuthSession {
        lock(&self.state).clone()
    }

    pub fn access_token(&self) -> Option<String> {
        lock(&self.state).access_token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        lock(&self.state).is_authenticated()
    }

    /// Called with the new session after every transition
    pub fn subscribe(&self, listener: impl Fn(&AuthSession) + Send + Sync + 'static) {
        lock(&self.listeners).push(Box::new(listener));
    }

    fn replace(&self, session: AuthSession) {
        self.store.save(&StoredTokens {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
        });
        *lock(&self.state) = session.clone();
        for listener in lock(&self.listeners).iter() {
            listener(&session);
        }
    }

    /// Send one request with the current token and locale
    pub async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Accept-Language".to_string(), self.locale().code().to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.access_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
        };
        self.transport.send(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method.as_str(), url, e);
            ApiError::Network(e)
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Adopt tokens without contacting the backend; the user stays unknown
    pub fn restore(&self, tokens: StoredTokens) {
        *lock(&self.state) = AuthSession {
            user: None,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        };
    }

    /// Restore the session from stored tokens at startup
    pub async fn init(&self) -> Result<UserInfo, ApiError> {
        let tokens = self.store.load();
        if tokens.access_token.is_none() && tokens.refresh_token.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        self.restore(tokens);

        let user = match self.fetch_me_with_retry().await {
            Ok(user) => user,
            Err(ApiError::Unauthorized) => {
                log::info!("stored access token rejected; refreshing");
                self.refresh().await?;
                match self.fetch_me().await {
                    Ok(user) => user,
                    Err(e) => {
                        self.teardown();
                        return Err(e);
                    }
                }
            }
            Err(e) => return Err(e),
        };

        let mut session = self.snapshot();
        session.user = Some(user.clone());
        self.replace(session);
        log::info!("session restored for {}", user.email);
        Ok(user)
    }

    async fn fetch_me(&self) -> Result<UserInfo, ApiError> {
        let response = self.send(HttpMethod::Get, &self.url(ME_PATH), None).await?;
        decode(decode_response(response)?)
    }

    /// `me` with capped exponential backoff on 401
    async fn fetch_me_with_retry(&self) -> Result<UserInfo, ApiError> {
        let mut attempt = 0;
        loop {
            let response = self.send(HttpMethod::Get, &self.url(ME_PATH), None).await?;
            if response.status == 401 && self.retry.should_retry(attempt) {
                let delay = self.retry.delay_ms(attempt);
                log::debug!("session fetch unauthorized; retry {} in {}ms", attempt + 1, delay);
                self.transport.pause(delay).await;
                attempt += 1;
                continue;
            }
            return decode(decode_response(response)?);
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        let body = encode(&LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .send(HttpMethod::Post, &self.url(LOGIN_PATH), Some(body.to_string()))
            .await?;
        // Rejected credentials, not an expired session
        if response.status == 401 {
            return Err(backend_error(&response));
        }
        let login: LoginResponse = decode(decode_response(response)?)?;
        let user = login.user.clone();
        self.replace(AuthSession::from_login(login));
        log::info!("signed in as {}", user.email);
        Ok(user)
    }

    /// Exchange the refresh token for a new access token.
    /// Any failure ends the session.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let Some(refresh_token) = self.snapshot().refresh_token else {
            self.teardown();
            return Err(ApiError::Unauthorized);
        };
        let body = encode(&RefreshRequest { refresh_token })?;
        let result = match self
            .send(HttpMethod::Post, &self.url(REFRESH_PATH), Some(body.to_string()))
            .await
        {
            Ok(response) => decode_response(response).and_then(decode::<RefreshResponse>),
            Err(e) => Err(e),
        };
        match result {
            Ok(refreshed) => {
                self.replace(self.snapshot().refreshed(refreshed));
                log::debug!("access token refreshed");
                Ok(())
            }
            Err(e) => {
                log::warn!("token refresh failed: {}", e);
                self.teardown();
                Err(ApiError::Unauthorized)
            }
        }
    }

    /// Revoke the refresh token (best effort) and end the session
    pub async fn logout(&self) {
        if let Some(refresh_token) = self.snapshot().refresh_token {
            let body = encode(&RefreshRequest { refresh_token }).map(|b| b.to_string());
            if let Ok(body) = body {
                if let Err(e) = self
                    .send(HttpMethod::Post, &self.url(LOGOUT_PATH), Some(body))
                    .await
                {
                    log::warn!("logout request failed: {}", e);
                }
            }
        }
        self.teardown();
        log::info!("signed out");
    }

    pub fn teardown(&self) {
        self.store.clear();
        *lock(&self.state) = AuthSession::default();
        for listener in lock(&self.listeners).iter() {
            listener(&AuthSession::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{json_response, ScriptedTransport};
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const ME: &str = r#"{"id":1,"name":"Admin","email":"admin@example.com","role":"admin"}"#;

    fn manager(
        transport: ScriptedTransport,
        tokens: StoredTokens,
    ) -> SessionManager<ScriptedTransport, MemoryTokenStore> {
        SessionManager::new(
            transport,
            MemoryTokenStore::new(tokens),
            "http://api.test",
            RetryPolicy::default(),
        )
    }

    fn stored() -> StoredTokens {
        StoredTokens {
            access_token: Some("a1".into()),
            refresh_token: Some("r1".into()),
        }
    }

    #[test]
    fn test_init_without_tokens_sends_nothing() {
        let transport = ScriptedTransport::new(vec![]);
        let session = manager(transport.clone(), StoredTokens::default());
        assert_eq!(block_on(session.init()), Err(ApiError::NotAuthenticated));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_init_retries_me_with_backoff() {
        let transport = ScriptedTransport::new(vec![
            json_response(401, ""),
            json_response(401, ""),
            json_response(200, ME),
        ]);
        let session = manager(transport.clone(), stored());

        let user = block_on(session.init()).unwrap();
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(transport.pauses(), vec![500, 1000]);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_init_refreshes_after_retries_exhausted() {
        let transport = ScriptedTransport::new(vec![
            json_response(401, ""),
            json_response(401, ""),
            json_response(401, ""),
            json_response(200, r#"{"accessToken":"a2","refreshToken":"r2"}"#),
            json_response(200, ME),
        ]);
        let session = manager(transport.clone(), stored());

        block_on(session.init()).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.access_token.as_deref(), Some("a2"));
        assert_eq!(snapshot.refresh_token.as_deref(), Some("r2"));
        assert_eq!(transport.requests()[4].header("Authorization"), Some("Bearer a2"));
    }

    #[test]
    fn test_init_tears_down_when_refresh_fails() {
        let transport = ScriptedTransport::new(vec![
            json_response(401, ""),
            json_response(401, ""),
            json_response(401, ""),
            json_response(401, ""),
        ]);
        let session = manager(transport, stored());

        assert_eq!(block_on(session.init()), Err(ApiError::Unauthorized));
        assert_eq!(session.snapshot(), AuthSession::default());
        assert_eq!(session.store.load(), StoredTokens::default());
    }

    #[test]
    fn test_init_keeps_tokens_on_network_error() {
        let transport = ScriptedTransport::with_results(vec![Err("offline".into())]);
        let session = manager(transport, stored());

        assert!(matches!(block_on(session.init()), Err(ApiError::Network(_))));
        assert_eq!(session.store.load(), stored());
    }

    #[test]
    fn test_login_and_logout_notify_listeners() {
        let transport = ScriptedTransport::new(vec![
            json_response(
                200,
                &format!(r#"{{"accessToken":"a1","refreshToken":"r1","user":{}}}"#, ME),
            ),
            json_response(204, ""),
        ]);
        let session = manager(transport.clone(), StoredTokens::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        session.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let user = block_on(session.login(" admin@example.com ", "secret-pass")).unwrap();
        assert!(user.is_admin());
        assert_eq!(session.store.load(), stored());

        block_on(session.logout());
        assert!(!session.is_authenticated());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let logout = &transport.requests()[1];
        assert!(logout.url.ends_with("/api/auth/logout"));
        assert_eq!(logout.body.as_deref(), Some(r#"{"refreshToken":"r1"}"#));
    }

    #[test]
    fn test_login_failure_surfaces_backend_message() {
        let transport = ScriptedTransport::new(vec![json_response(
            400,
            r#"{"message":"Invalid credentials"}"#,
        )]);
        let session = manager(transport, StoredTokens::default());
        let err = block_on(session.login("a@b.c", "nope")).unwrap_err();
        assert_eq!(err.backend_message(), Some("Invalid credentials"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_401_is_not_a_session_expiry() {
        let transport = ScriptedTransport::new(vec![json_response(
            401,
            r#"{"message":"Invalid credentials"}"#,
        )]);
        let session = manager(transport.clone(), StoredTokens::default());
        let err = block_on(session.login("a@b.c", "nope")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Backend {
                status: 401,
                message: Some("Invalid credentials".into())
            }
        );
        assert_eq!(err.user_message(Locale::En), "Invalid credentials");
        // No refresh attempt follows a failed sign-in
        assert_eq!(transport.requests().len(), 1);
        assert!(!session.is_authenticated());
    }
}
