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
pub struct InquiryTypeTranslation {
    pub locale: String,
    #[serde(default)]
    pub name: String,
}

impl InquiryTypeTranslation {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale: locale.code().to_string(),
            name: String::new(),
        }
    }
}

impl Translation for InquiryTypeTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }

    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Subject options of the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryType {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "serde_helpers::default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub translations: Vec<InquiryTypeTranslation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for InquiryType {
    type Translation = InquiryTypeTranslation;
    const KIND: EntityKind = EntityKind::InquiryType;

    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> &str {
        &self.slug
    }

    fn translations(&self) -> &[InquiryTypeTranslation] {
        &self.translations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryTypeDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(range(min = 0, code = "range"))]
    pub order_index: i32,
    pub is_active: bool,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Vec<InquiryTypeTranslation>,
}

impl Default for InquiryTypeDto {
    fn default() -> Self {
        Self {
            id: None,
            slug: String::new(),
            order_index: 0,
            is_active: true,
            translations: Locale::all()
                .into_iter()
                .map(InquiryTypeTranslation::empty)
                .collect(),
        }
    }
}

impl From<&InquiryType> for InquiryTypeDto {
    fn from(inquiry_type: &InquiryType) -> Self {
        let mut translations = inquiry_type.translations.clone();
        for locale in Locale::all() {
            if !translations.iter().any(|t| t.locale() == Some(locale)) {
                translations.push(InquiryTypeTranslation::empty(locale));
            }
        }
        Self {
            id: Some(inquiry_type.id.clone()),
            slug: inquiry_type.slug.clone(),
            order_index: inquiry_type.order_index,
            is_active: inquiry_type.is_active,
            translations,
        }
    }
}

impl EntityDto for InquiryTypeDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.slug = self.slug.trim().to_string();
        self.translations.retain(|t| !t.name.trim().is_empty());
        self
    }
}
