use crate::domain::common::{Entity, EntityDto, EntityMetadata, NoTranslation};
use crate::enums::{EntityKind, UserRole};
use crate::shared::serde_helpers;
use crate::shared::validation::{validate_not_blank, CODE_REQUIRED};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "serde_helpers::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub last_login_at: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for User {
    type Translation = NoTranslation;
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> &str {
        &self.email
    }

    fn translations(&self) -> &[NoTranslation] {
        &[]
    }

    fn extra_search_text(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Create / update payload. The password is only sent when it is set;
/// creating a user requires one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(email(code = "email"))]
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, code = "password_length"))]
    pub password: Option<String>,
}

impl Default for UserDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            role: UserRole::default(),
            is_active: true,
            password: None,
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_active: user.is_active,
            password: None,
        }
    }
}

impl EntityDto for UserDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.password = self.password.filter(|p| !p.is_empty());
        self
    }

    fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.is_create() && self.password.is_none() {
            errors.add(
                "password",
                ValidationError::new(CODE_REQUIRED)
                    .with_message(Cow::Borrowed("Password is required")),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::Locale;
    use crate::shared::validation::field_codes;

    #[test]
    fn test_user_display_falls_back_to_email() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "name": "Admin", "email": "admin@example.com", "role": "admin"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_active);
        assert_eq!(user.display_name(Locale::En), "admin@example.com");
        assert!(user.matches_search("adm"));
    }

    #[test]
    fn test_password_required_on_create_only() {
        let create = UserDto {
            name: "Sara".into(),
            email: "sara@example.com".into(),
            ..UserDto::default()
        };
        let codes = field_codes(&create.check().unwrap_err());
        assert_eq!(codes.get("password").map(String::as_str), Some(CODE_REQUIRED));

        let update = UserDto {
            id: Some("4".into()),
            ..create.clone()
        };
        assert!(update.check().is_ok());

        let short = UserDto {
            password: Some("short".into()),
            ..create
        };
        let codes = field_codes(&short.check().unwrap_err());
        assert_eq!(
            codes.get("password").map(String::as_str),
            Some("password_length")
        );
    }
}
