//! Locale fallback chain for translated display fields.
//!
//! Every translated entity resolves its label the same way:
//! exact locale → first available translation → identifier → placeholder.

use super::locale::Locale;

/// Placeholder shown when neither a translation nor an identifier exists
pub const MISSING_LABEL: &str = "—";

/// A locale-scoped record of display fields attached to an entity
pub trait Translation {
    /// Locale code as stored by the backend (`"en"`, `"ar"`, ...)
    fn locale_code(&self) -> &str;

    /// Primary display label (name or title)
    fn label(&self) -> Option<&str>;

    fn locale(&self) -> Option<Locale> {
        Locale::from_code(self.locale_code())
    }
}

/// Which tier of the fallback chain produced the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySource {
    ExactLocale,
    FirstAvailable,
    Identifier,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    pub text: String,
    pub source: DisplaySource,
}

impl DisplayText {
    pub fn is_translated(&self) -> bool {
        matches!(
            self.source,
            DisplaySource::ExactLocale | DisplaySource::FirstAvailable
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Find the translation record for `locale`, if any
pub fn find_translation<T: Translation>(translations: &[T], locale: Locale) -> Option<&T> {
    translations
        .iter()
        .find(|t| t.locale() == Some(locale))
}

/// Resolve the display label of an entity.
///
/// Blank labels are treated as missing at every tier.
pub fn resolve_display_text<T: Translation>(
    translations: &[T],
    locale: Locale,
    fallback_id: &str,
) -> DisplayText {
    if let Some(text) = find_translation(translations, locale).and_then(|t| non_blank(t.label())) {
        return DisplayText {
            text: text.to_string(),
            source: DisplaySource::ExactLocale,
        };
    }

    if let Some(text) = translations.first().and_then(|t| non_blank(t.label())) {
        return DisplayText {
            text: text.to_string(),
            source: DisplaySource::FirstAvailable,
        };
    }

    match non_blank(Some(fallback_id)) {
        Some(id) => DisplayText {
            text: id.to_string(),
            source: DisplaySource::Identifier,
        },
        None => DisplayText {
            text: MISSING_LABEL.to_string(),
            source: DisplaySource::Placeholder,
        },
    }
}

/// Same chain for a secondary field (description, summary, ...).
///
/// Returns `None` instead of an identifier when no translation carries the field.
pub fn resolve_field<'a, T, F>(translations: &'a [T], locale: Locale, field: F) -> Option<&'a str>
where
    T: Translation,
    F: Fn(&'a T) -> Option<&'a str>,
{
    find_translation(translations, locale)
        .and_then(|t| non_blank(field(t)))
        .or_else(|| translations.first().and_then(|t| non_blank(field(t))))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tr {
        locale: &'static str,
        name: Option<&'static str>,
        description: Option<&'static str>,
    }

    impl Translation for Tr {
        fn locale_code(&self) -> &str {
            self.locale
        }

        fn label(&self) -> Option<&str> {
            self.name
        }
    }

    fn tr(locale: &'static str, name: &'static str) -> Tr {
        Tr {
            locale,
            name: Some(name),
            description: None,
        }
    }

    #[test]
    fn test_exact_locale_wins() {
        let translations = vec![tr("en", "Web"), tr("ar", "ويب")];
        let text = resolve_display_text(&translations, Locale::Ar, "web");
        assert_eq!(text.text, "ويب");
        assert_eq!(text.source, DisplaySource::ExactLocale);
    }

    #[test]
    fn test_first_available_when_locale_missing() {
        let translations = vec![tr("en", "Mobile")];
        let text = resolve_display_text(&translations, Locale::Ar, "mobile");
        assert_eq!(text.text, "Mobile");
        assert_eq!(text.source, DisplaySource::FirstAvailable);
    }

    #[test]
    fn test_identifier_when_no_translations() {
        let translations: Vec<Tr> = Vec::new();
        let text = resolve_display_text(&translations, Locale::En, "cloud-ops");
        assert_eq!(text.text, "cloud-ops");
        assert_eq!(text.source, DisplaySource::Identifier);
        assert!(!text.is_translated());
    }

    #[test]
    fn test_placeholder_when_identifier_blank() {
        let translations: Vec<Tr> = Vec::new();
        let text = resolve_display_text(&translations, Locale::En, "  ");
        assert_eq!(text.text, MISSING_LABEL);
        assert_eq!(text.source, DisplaySource::Placeholder);
    }

    #[test]
    fn test_blank_exact_label_falls_through() {
        let translations = vec![tr("en", "Design"), tr("ar", "")];
        let text = resolve_display_text(&translations, Locale::Ar, "design");
        assert_eq!(text.text, "Design");
        assert_eq!(text.source, DisplaySource::FirstAvailable);
    }

    #[test]
    fn test_region_locale_matches() {
        let translations = vec![tr("en", "Design"), tr("ar-EG", "تصميم")];
        let text = resolve_display_text(&translations, Locale::Ar, "design");
        assert_eq!(text.text, "تصميم");
    }

    #[test]
    fn test_resolve_secondary_field() {
        let translations = vec![
            Tr {
                locale: "en",
                name: Some("Web"),
                description: Some("Sites and apps"),
            },
            Tr {
                locale: "ar",
                name: Some("ويب"),
                description: None,
            },
        ];
        let description = resolve_field(&translations, Locale::Ar, |t| t.description);
        assert_eq!(description, Some("Sites and apps"));

        let empty: Vec<Tr> = Vec::new();
        assert_eq!(resolve_field(&empty, Locale::En, |t| t.description), None);
    }
}
