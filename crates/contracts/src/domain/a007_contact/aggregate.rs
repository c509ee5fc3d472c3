use crate::domain::common::{Entity, EntityDto, EntityMetadata, NoTranslation};
use crate::enums::{ContactStatus, EntityKind};
use crate::shared::serde_helpers;
use crate::shared::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message submitted through the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_id")]
    pub inquiry_type_id: Option<String>,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for Contact {
    type Translation = NoTranslation;
    const KIND: EntityKind = EntityKind::Contact;

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
        let mut text = vec![self.name.as_str(), self.message.as_str()];
        if let Some(subject) = self.subject.as_deref() {
            text.push(subject);
        }
        text
    }
}

/// Public submission payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom(function = "validate_not_blank"), length(max = 120, code = "too_long"))]
    pub name: String,
    #[validate(email(code = "email"))]
    pub email: String,
    #[validate(length(min = 6, max = 32, code = "phone"))]
    pub phone: Option<String>,
    #[validate(length(max = 200, code = "too_long"))]
    pub subject: Option<String>,
    #[validate(length(min = 10, max = 5000, code = "message_length"))]
    pub message: String,
    pub inquiry_type_id: Option<String>,
}

impl EntityDto for ContactDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.message = self.message.trim().to_string();
        self.phone = self.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
        self.subject = self.subject.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        self.inquiry_type_id = self.inquiry_type_id.filter(|i| !i.trim().is_empty());
        self
    }
}

/// Admin status change (`PATCH /api/contacts/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactStatusDto {
    pub status: ContactStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::Locale;
    use crate::shared::validation::field_codes;

    #[test]
    fn test_contact_without_translations_uses_email() {
        let contact: Contact = serde_json::from_str(
            r#"{"id": 3, "name": "Omar", "email": "omar@example.com",
                "message": "Need a website", "status": "read"}"#,
        )
        .unwrap();
        assert_eq!(contact.status, ContactStatus::Read);
        assert_eq!(contact.display_name(Locale::Ar), "omar@example.com");
        assert!(contact.matches_search("website"));
    }

    #[test]
    fn test_public_form_rules() {
        let dto = ContactDto {
            name: " ".into(),
            email: "omar@".into(),
            message: "Hi".into(),
            ..ContactDto::default()
        };
        let codes = field_codes(&dto.check().unwrap_err());
        assert_eq!(codes.get("name").map(String::as_str), Some("required"));
        assert_eq!(codes.get("email").map(String::as_str), Some("email"));
        assert_eq!(codes.get("message").map(String::as_str), Some("message_length"));
    }

    #[test]
    fn test_prepared_then_valid() {
        let dto = ContactDto {
            name: " Omar ".into(),
            email: " omar@example.com ".into(),
            phone: Some("".into()),
            message: "I would like a quote for a mobile app.".into(),
            ..ContactDto::default()
        }
        .prepared();
        assert_eq!(dto.phone, None);
        assert!(dto.check().is_ok());
    }
}
