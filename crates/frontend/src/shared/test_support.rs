//! Scripted HTTP transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::shared::api_client::{HttpRequest, HttpResponse, HttpTransport};
use crate::shared::retry::RetryPolicy;
use crate::system::auth::session::{MemoryTokenStore, SessionManager, StoredTokens};

#[derive(Default)]
struct Script {
    results: VecDeque<Result<HttpResponse, String>>,
    requests: Vec<HttpRequest>,
    pauses: Vec<u32>,
}

/// Replays canned responses in order and records what was sent
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    pub fn with_results(results: Vec<Result<HttpResponse, String>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                results: results.into(),
                ..Script::default()
            })),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn pauses(&self) -> Vec<u32> {
        self.script.lock().unwrap().pauses.clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request);
        script
            .results
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response left".to_string()))
    }

    async fn pause(&self, ms: u32) {
        self.script.lock().unwrap().pauses.push(ms);
    }
}

pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}

pub type TestSession = SessionManager<ScriptedTransport, MemoryTokenStore>;

/// Signed-in session against `http://api.test`
pub fn session_with_tokens(
    transport: ScriptedTransport,
    access: &str,
    refresh: &str,
) -> Arc<TestSession> {
    let tokens = StoredTokens {
        access_token: Some(access.to_string()),
        refresh_token: Some(refresh.to_string()),
    };
    let session = SessionManager::new(
        transport,
        MemoryTokenStore::new(tokens.clone()),
        "http://api.test",
        RetryPolicy::default(),
    );
    session.restore(tokens);
    Arc::new(session)
}

/// Session without tokens, as for public pages
pub fn anonymous_session(transport: ScriptedTransport) -> Arc<TestSession> {
    Arc::new(SessionManager::new(
        transport,
        MemoryTokenStore::default(),
        "http://api.test",
        RetryPolicy::default(),
    ))
}
