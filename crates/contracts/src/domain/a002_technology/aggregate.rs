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
pub struct TechnologyTranslation {
    pub locale: String,
    #[serde(default)]
    pub name: String,
}

impl TechnologyTranslation {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale: locale.code().to_string(),
            name: String::new(),
        }
    }
}

impl Translation for TechnologyTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }

    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Tool or framework listed in the stack section and on projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    /// Icon name, resolved by the frontend icon registry
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_id")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "serde_helpers::default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub translations: Vec<TechnologyTranslation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for Technology {
    type Translation = TechnologyTranslation;
    const KIND: EntityKind = EntityKind::Technology;

    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> &str {
        &self.slug
    }

    fn translations(&self) -> &[TechnologyTranslation] {
        &self.translations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(max = 64, code = "too_long"))]
    pub icon: Option<String>,
    pub category_id: Option<String>,
    #[validate(range(min = 0, code = "range"))]
    pub order_index: i32,
    pub is_active: bool,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Vec<TechnologyTranslation>,
}

impl Default for TechnologyDto {
    fn default() -> Self {
        Self {
            id: None,
            slug: String::new(),
            icon: None,
            category_id: None,
            order_index: 0,
            is_active: true,
            translations: Locale::all()
                .into_iter()
                .map(TechnologyTranslation::empty)
                .collect(),
        }
    }
}

impl From<&Technology> for TechnologyDto {
    fn from(technology: &Technology) -> Self {
        let mut translations = technology.translations.clone();
        for locale in Locale::all() {
            if !translations.iter().any(|t| t.locale() == Some(locale)) {
                translations.push(TechnologyTranslation::empty(locale));
            }
        }
        Self {
            id: Some(technology.id.clone()),
            slug: technology.slug.clone(),
            icon: technology.icon.clone(),
            category_id: technology.category_id.clone(),
            order_index: technology.order_index,
            is_active: technology.is_active,
            translations,
        }
    }
}

impl EntityDto for TechnologyDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.slug = self.slug.trim().to_string();
        self.icon = self.icon.map(|i| i.trim().to_string()).filter(|i| !i.is_empty());
        self.category_id = self.category_id.filter(|c| !c.trim().is_empty());
        self.translations.retain(|t| !t.name.trim().is_empty());
        self
    }
}
