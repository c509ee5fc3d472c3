use crate::domain::common::{Entity, EntityDto, EntityMetadata};
use crate::enums::{EntityKind, ProjectType};
use crate::shared::locale::Locale;
use crate::shared::serde_helpers;
use crate::shared::translation::Translation;
use crate::shared::validation::{validate_slug, validate_translations};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTranslation {
    pub locale: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Rich text (HTML) produced by the editor widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectTranslation {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale: locale.code().to_string(),
            ..Self::default()
        }
    }
}

impl Translation for ProjectTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }

    fn label(&self) -> Option<&str> {
        Some(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_id")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default, deserialize_with = "serde_helpers::id_list")]
    pub technology_ids: Vec<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "serde_helpers::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub translations: Vec<ProjectTranslation>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Entity for Project {
    type Translation = ProjectTranslation;
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> &str {
        &self.slug
    }

    fn translations(&self) -> &[ProjectTranslation] {
        &self.translations
    }

    fn extra_search_text(&self) -> Vec<&str> {
        self.translations
            .iter()
            .filter_map(|t| t.summary.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    pub category_id: Option<String>,
    pub project_type: ProjectType,
    pub technology_ids: Vec<String>,
    #[validate(url(code = "url"))]
    pub cover_url: Option<String>,
    #[validate(url(code = "url"))]
    pub live_url: Option<String>,
    #[validate(url(code = "url"))]
    pub repo_url: Option<String>,
    pub completed_at: Option<String>,
    #[validate(range(min = 0, code = "range"))]
    pub order_index: i32,
    pub is_active: bool,
    pub is_featured: bool,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Vec<ProjectTranslation>,
}

impl Default for ProjectDto {
    fn default() -> Self {
        Self {
            id: None,
            slug: String::new(),
            category_id: None,
            project_type: ProjectType::default(),
            technology_ids: Vec::new(),
            cover_url: None,
            live_url: None,
            repo_url: None,
            completed_at: None,
            order_index: 0,
            is_active: true,
            is_featured: false,
            translations: Locale::all().into_iter().map(ProjectTranslation::empty).collect(),
        }
    }
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        let mut translations = project.translations.clone();
        for locale in Locale::all() {
            if !translations.iter().any(|t| t.locale() == Some(locale)) {
                translations.push(ProjectTranslation::empty(locale));
            }
        }
        Self {
            id: Some(project.id.clone()),
            slug: project.slug.clone(),
            category_id: project.category_id.clone(),
            project_type: project.project_type,
            technology_ids: project.technology_ids.clone(),
            cover_url: project.cover_url.clone(),
            live_url: project.live_url.clone(),
            repo_url: project.repo_url.clone(),
            completed_at: project.completed_at.clone(),
            order_index: project.order_index,
            is_active: project.is_active,
            is_featured: project.is_featured,
            translations,
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl EntityDto for ProjectDto {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn prepared(mut self) -> Self {
        self.slug = self.slug.trim().to_string();
        self.category_id = trimmed(self.category_id);
        self.cover_url = trimmed(self.cover_url);
        self.live_url = trimmed(self.live_url);
        self.repo_url = trimmed(self.repo_url);
        self.completed_at = trimmed(self.completed_at);
        self.technology_ids.retain(|id| !id.trim().is_empty());
        self.technology_ids.dedup();
        self.translations.retain(|t| !t.title.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_mixed_ids() {
        let project: Project = serde_json::from_str(
            r#"{"id": 12, "slug": "shop", "categoryId": 2, "projectType": "mobile",
                "technologyIds": [1, 4], "isFeatured": true,
                "translations": [{"locale": "en", "title": "Shop", "summary": "Store app"}]}"#,
        )
        .unwrap();
        assert_eq!(project.project_type, ProjectType::Mobile);
        assert_eq!(project.technology_ids, vec!["1", "4"]);
        assert!(project.matches_search("STORE"));
        assert!(!project.matches_search("bank"));
    }

    #[test]
    fn test_prepared_and_validated() {
        let mut dto = ProjectDto::default();
        dto.slug = "shop".into();
        dto.live_url = Some(" https://shop.example.com ".into());
        dto.repo_url = Some(String::new());
        dto.technology_ids = vec!["1".into(), "1".into(), " ".into()];
        dto.translations[0].title = "Shop".into();
        let dto = dto.prepared();
        assert_eq!(dto.live_url.as_deref(), Some("https://shop.example.com"));
        assert_eq!(dto.repo_url, None);
        assert_eq!(dto.technology_ids, vec!["1"]);
        assert!(dto.check().is_ok());
    }
}
