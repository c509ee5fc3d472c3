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
pub struct ServiceTranslation {
    pub locale: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServiceTranslation {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale: locale.code().to_string(),
            ..Self::default()
        }
    }
}

impl Translation for ServiceTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }

    fn label(&self) -> Option<&str> {
        Some(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "serde_helpers::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub translations: Vec<ServiceTranslation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for Service {
    type Translation = ServiceTranslation;
    const KIND: EntityKind = EntityKind::Service;

    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> &str {
        &self.slug
    }

    fn translations(&self) -> &[ServiceTranslation] {
        &self.translations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(max = 64, code = "too_long"))]
    pub icon: Option<String>,
    #[validate(range(min = 0, code = "range"))]
    pub order_index: i32,
    pub is_active: bool,
    pub is_featured: bool,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Vec<ServiceTranslation>,
}

impl Default for ServiceDto {
    fn default() -> Self {
        Self {
            id: None,
            slug: String::new(),
            icon: None,
            order_index: 0,
            is_active: true,
            is_featured: false,
            translations: Locale::all().into_iter().map(ServiceTranslation::empty).collect(),
        }
    }
}

impl From<&Service> for ServiceDto {
    fn from(service: &Service) -> Self {
        let mut translations = service.translations.clone();
        for locale in Locale::all() {
            if !translations.iter().any(|t| t.locale() == Some(locale)) {
                translations.push(ServiceTranslation::empty(locale));
            }
        }
        Self {
            id: Some(service.id.clone()),
            slug: service.slug.clone(),
            icon: service.icon.clone(),
            order_index: service.order_index,
            is_active: service.is_active,
            is_featured: service.is_featured,
            translations,
        }
    }
}

impl EntityDto for ServiceDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.slug = self.slug.trim().to_string();
        self.icon = self.icon.map(|i| i.trim().to_string()).filter(|i| !i.is_empty());
        self.translations.retain(|t| !t.title.trim().is_empty());
        for t in &mut self.translations {
            t.description = t.description.take().filter(|d| !d.trim().is_empty());
        }
        self
    }
}
