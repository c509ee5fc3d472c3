use crate::domain::common::{Entity, EntityDto, EntityMetadata};
use crate::enums::EntityKind;
use crate::shared::locale::Locale;
use crate::shared::serde_helpers;
use crate::shared::translation::Translation;
use crate::shared::validation::validate_translations;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Localized client name, role and quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialTranslation {
    pub locale: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl TestimonialTranslation {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale: locale.code().to_string(),
            ..Self::default()
        }
    }
}

impl Translation for TestimonialTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }

    fn label(&self) -> Option<&str> {
        Some(&self.client_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "serde_helpers::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub translations: Vec<TestimonialTranslation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for Testimonial {
    type Translation = TestimonialTranslation;
    const KIND: EntityKind = EntityKind::Testimonial;

    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }

    fn translations(&self) -> &[TestimonialTranslation] {
        &self.translations
    }

    fn extra_search_text(&self) -> Vec<&str> {
        self.translations.iter().map(|t| t.content.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(max = 120, code = "too_long"))]
    pub company: Option<String>,
    #[validate(url(code = "url"))]
    pub avatar_url: Option<String>,
    #[validate(range(min = 1, max = 5, code = "rating"))]
    pub rating: u8,
    #[validate(range(min = 0, code = "range"))]
    pub order_index: i32,
    pub is_active: bool,
    pub is_featured: bool,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Vec<TestimonialTranslation>,
}

impl Default for TestimonialDto {
    fn default() -> Self {
        Self {
            id: None,
            company: None,
            avatar_url: None,
            rating: 5,
            order_index: 0,
            is_active: true,
            is_featured: false,
            translations: Locale::all()
                .into_iter()
                .map(TestimonialTranslation::empty)
                .collect(),
        }
    }
}

impl From<&Testimonial> for TestimonialDto {
    fn from(testimonial: &Testimonial) -> Self {
        let mut translations = testimonial.translations.clone();
        for locale in Locale::all() {
            if !translations.iter().any(|t| t.locale() == Some(locale)) {
                translations.push(TestimonialTranslation::empty(locale));
            }
        }
        Self {
            id: Some(testimonial.id.clone()),
            company: testimonial.company.clone(),
            avatar_url: testimonial.avatar_url.clone(),
            rating: testimonial.rating,
            order_index: testimonial.order_index,
            is_active: testimonial.is_active,
            is_featured: testimonial.is_featured,
            translations,
        }
    }
}

impl EntityDto for TestimonialDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.company = self.company.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
        self.avatar_url = self
            .avatar_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        self.translations
            .retain(|t| !t.client_name.trim().is_empty() || !t.content.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::field_codes;

    #[test]
    fn test_display_name_uses_client_name() {
        let testimonial: Testimonial = serde_json::from_str(
            r#"{"id": 1, "company": "Acme", "rating": 5, "translations": [
                {"locale": "ar", "clientName": "سارة", "content": "عمل رائع"},
                {"locale": "en", "clientName": "Sara", "content": "Great work"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(testimonial.display_name(Locale::En), "Sara");
        assert!(testimonial.matches_search("great"));
        assert!(testimonial.matches_search("acme"));
    }

    #[test]
    fn test_rating_and_url_rules() {
        let mut dto = TestimonialDto::default();
        dto.translations[0].client_name = "Sara".into();
        dto.rating = 0;
        dto.avatar_url = Some("not a url".into());
        let codes = field_codes(&dto.check().unwrap_err());
        assert_eq!(codes.get("rating").map(String::as_str), Some("rating"));
        assert_eq!(codes.get("avatar_url").map(String::as_str), Some("url"));
    }
}
