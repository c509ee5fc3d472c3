use crate::enums::EntityKind;
use crate::shared::locale::Locale;
use crate::shared::translation::{resolve_display_text, DisplayText, Translation};

/// Translation type for entities that carry no localized fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTranslation {}

impl Translation for NoTranslation {
    fn locale_code(&self) -> &str {
        match *self {}
    }

    fn label(&self) -> Option<&str> {
        match *self {}
    }
}

/// A backend-managed record shown in the admin
///
/// Entities are owned by the backend; the client only holds cached copies.
pub trait Entity {
    type Translation: Translation;

    /// Entity kind (drives REST paths and cache keys)
    const KIND: EntityKind;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> &str;

    /// Slug, email or another human-readable key
    fn natural_key(&self) -> &str;

    fn translations(&self) -> &[Self::Translation];

    /// Extra searchable strings besides the key and translation labels
    fn extra_search_text(&self) -> Vec<&str> {
        Vec::new()
    }

    // ============================================================================
    // Derived helpers
    // ============================================================================

    /// Identifier used at the end of the locale fallback chain
    fn fallback_id(&self) -> &str {
        let key = self.natural_key();
        if key.trim().is_empty() {
            self.id()
        } else {
            key
        }
    }

    fn display_text(&self, locale: Locale) -> DisplayText {
        resolve_display_text(self.translations(), locale, self.fallback_id())
    }

    fn display_name(&self, locale: Locale) -> String {
        self.display_text(locale).text
    }

    /// Case-insensitive substring match used for client-side search
    fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let contains = |value: &str| value.to_lowercase().contains(&needle);
        contains(self.natural_key())
            || self
                .translations()
                .iter()
                .filter_map(|t| t.label())
                .any(contains)
            || self.extra_search_text().into_iter().any(contains)
    }

    fn collection_name() -> &'static str {
        Self::KIND.collection()
    }

    fn element_name(locale: Locale) -> &'static str {
        Self::KIND.element_name(locale)
    }

    fn list_name(locale: Locale) -> &'static str {
        Self::KIND.list_name(locale)
    }
}
