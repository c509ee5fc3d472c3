use crate::enums::UserRole;
use crate::shared::serde_helpers;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// The backend may rotate the refresh token; when it does not, the old one stays valid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Authenticated identity and tokens held by the client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    pub user: Option<UserInfo>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl AuthSession {
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            user: Some(response.user),
            access_token: Some(response.access_token),
            refresh_token: Some(response.refresh_token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    /// Apply a refresh response, keeping the refresh token when none is returned
    pub fn refreshed(mut self, response: RefreshResponse) -> Self {
        self.access_token = Some(response.access_token);
        if let Some(refresh) = response.refresh_token {
            self.refresh_token = Some(refresh);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_camel_case() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"accessToken":"a1","refreshToken":"r1",
                "user":{"id":7,"name":"Admin","email":"admin@example.com","role":"admin"}}"#,
        )
        .unwrap();
        let session = AuthSession::from_login(response);
        assert!(session.is_authenticated());
        assert!(session.user.as_ref().unwrap().is_admin());
        assert_eq!(session.user.as_ref().unwrap().id, "7");
    }

    #[test]
    fn test_refresh_keeps_previous_token() {
        let session = AuthSession {
            user: None,
            access_token: Some("old".into()),
            refresh_token: Some("r1".into()),
        };
        let refreshed = session.refreshed(RefreshResponse {
            access_token: "new".into(),
            refresh_token: None,
        });
        assert_eq!(refreshed.access_token.as_deref(), Some("new"));
        assert_eq!(refreshed.refresh_token.as_deref(), Some("r1"));
        assert!(!refreshed.is_authenticated());
    }
}
