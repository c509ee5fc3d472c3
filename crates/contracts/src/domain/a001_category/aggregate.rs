use crate::domain::common::{Entity, EntityDto, EntityMetadata};
use crate::enums::EntityKind;
use crate::shared::locale::Locale;
use crate::shared::serde_helpers;
use crate::shared::translation::Translation;
use crate::shared::validation::{validate_slug, validate_translations};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTranslation {
    pub locale: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryTranslation {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale: locale.code().to_string(),
            ..Self::default()
        }
    }
}

impl Translation for CategoryTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }

    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Project / technology grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "serde_helpers::default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub translations: Vec<CategoryTranslation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for Category {
    type Translation = CategoryTranslation;
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> &str {
        &self.slug
    }

    fn translations(&self) -> &[CategoryTranslation] {
        &self.translations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(range(min = 0, code = "range"))]
    pub order_index: i32,
    pub is_active: bool,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Vec<CategoryTranslation>,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            id: None,
            slug: String::new(),
            order_index: 0,
            is_active: true,
            translations: Locale::all().into_iter().map(CategoryTranslation::empty).collect(),
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        let mut translations = category.translations.clone();
        for locale in Locale::all() {
            if !translations.iter().any(|t| t.locale() == Some(locale)) {
                translations.push(CategoryTranslation::empty(locale));
            }
        }
        Self {
            id: Some(category.id.clone()),
            slug: category.slug.clone(),
            order_index: category.order_index,
            is_active: category.is_active,
            translations,
        }
    }
}

impl EntityDto for CategoryDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.slug = self.slug.trim().to_string();
        self.translations.retain(|t| !t.name.trim().is_empty());
        for t in &mut self.translations {
            t.name = t.name.trim().to_string();
            t.description = t
                .description
                .take()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::field_codes;

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "slug": "web-development",
            "orderIndex": 2,
            "isActive": true,
            "translations": [
                {"locale": "en", "name": "Web Development", "description": "Sites"},
                {"locale": "ar", "name": "تطوير الويب"}
            ],
            "createdAt": "2024-03-15T14:02:26.123Z"
        }"#
    }

    #[test]
    fn test_deserialize_backend_record() {
        let category: Category = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(category.id, "7");
        assert_eq!(category.order_index, 2);
        assert_eq!(category.display_name(Locale::Ar), "تطوير الويب");
        assert_eq!(category.metadata.created_at.as_deref(), Some("2024-03-15T14:02:26.123Z"));
    }

    #[test]
    fn test_null_translations_fall_back_to_slug() {
        let category: Category =
            serde_json::from_str(r#"{"id": "1", "slug": "mobile", "translations": null}"#).unwrap();
        assert!(category.translations.is_empty());
        assert!(category.is_active);
        assert_eq!(category.display_name(Locale::En), "mobile");
    }

    #[test]
    fn test_dto_from_entity_adds_missing_locales() {
        let mut category: Category = serde_json::from_str(sample_json()).unwrap();
        category.translations.truncate(1);
        let dto = CategoryDto::from(&category);
        assert_eq!(dto.translations.len(), 2);
        assert_eq!(dto.translations[1].locale, "ar");
        assert!(!dto.is_create());
    }

    #[test]
    fn test_prepared_drops_blank_translations() {
        let mut dto = CategoryDto::default();
        dto.slug = " design ".into();
        dto.translations[0].name = "Design".into();
        dto.translations[0].description = Some("  ".into());
        let dto = dto.prepared();
        assert_eq!(dto.slug, "design");
        assert_eq!(dto.translations.len(), 1);
        assert_eq!(dto.translations[0].description, None);
        assert!(dto.check().is_ok());
    }

    #[test]
    fn test_validation_codes() {
        let mut dto = CategoryDto::default();
        dto.slug = "Bad Slug".into();
        dto.order_index = -1;
        let codes = field_codes(&dto.check().unwrap_err());
        assert_eq!(codes.get("slug").map(String::as_str), Some("slug"));
        assert_eq!(codes.get("order_index").map(String::as_str), Some("range"));
        assert_eq!(
            codes.get("translations").map(String::as_str),
            Some("translation_missing")
        );
    }

    #[test]
    fn test_dto_serializes_camel_case_without_id() {
        let dto = CategoryDto::default();
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["isActive"], serde_json::json!(true));
        assert_eq!(value["orderIndex"], serde_json::json!(0));
    }
}
