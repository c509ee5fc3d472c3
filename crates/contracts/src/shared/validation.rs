//! Validation rules shared by the entity forms.
//!
//! Errors carry a machine code (`required`, `slug`, ...) that the frontend
//! maps to a localized message.

use super::locale::Locale;
use super::translation::Translation;
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

pub const CODE_REQUIRED: &str = "required";
pub const CODE_SLUG: &str = "slug";
pub const CODE_TRANSLATION_MISSING: &str = "translation_missing";
pub const CODE_LOCALE_UNSUPPORTED: &str = "locale_unsupported";
pub const CODE_LOCALE_DUPLICATE: &str = "locale_duplicate";

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Lowercase ASCII letters, digits and single dashes, e.g. `web-development`
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.trim().is_empty() {
        return Err(error(CODE_REQUIRED, "Slug is required"));
    }
    let well_formed = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");
    if well_formed {
        Ok(())
    } else {
        Err(error(
            CODE_SLUG,
            "Slug may contain lowercase letters, digits and single dashes",
        ))
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error(CODE_REQUIRED, "This field is required"))
    } else {
        Ok(())
    }
}

/// At least one translation with a label, every locale supported and unique
pub fn validate_translations<T: Translation>(translations: &[T]) -> Result<(), ValidationError> {
    let mut seen: Vec<Locale> = Vec::new();
    for translation in translations {
        let Some(locale) = translation.locale() else {
            return Err(error(CODE_LOCALE_UNSUPPORTED, "Unsupported translation locale"));
        };
        if seen.contains(&locale) {
            return Err(error(CODE_LOCALE_DUPLICATE, "Duplicate translation locale"));
        }
        seen.push(locale);
    }

    let has_label = translations
        .iter()
        .any(|t| t.label().map(|l| !l.trim().is_empty()).unwrap_or(false));
    if has_label {
        Ok(())
    } else {
        Err(error(
            CODE_TRANSLATION_MISSING,
            "At least one translation needs a name",
        ))
    }
}

/// Flatten `ValidationErrors` into `field -> first error code`
pub fn field_codes(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first()
                .map(|e| (field.to_string(), e.code.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    struct Tr(&'static str, &'static str);

    impl Translation for Tr {
        fn locale_code(&self) -> &str {
            self.0
        }

        fn label(&self) -> Option<&str> {
            Some(self.1)
        }
    }

    #[test]
    fn test_slug_rules() {
        assert!(validate_slug("web-development").is_ok());
        assert!(validate_slug("api2").is_ok());
        assert_eq!(validate_slug("").unwrap_err().code, CODE_REQUIRED);
        assert_eq!(validate_slug("Web Dev").unwrap_err().code, CODE_SLUG);
        assert_eq!(validate_slug("-web").unwrap_err().code, CODE_SLUG);
        assert_eq!(validate_slug("web--dev").unwrap_err().code, CODE_SLUG);
    }

    #[test]
    fn test_translation_rules() {
        assert!(validate_translations(&[Tr("en", "Web"), Tr("ar", "")]).is_ok());
        let none: [Tr; 0] = [];
        assert_eq!(
            validate_translations(&none).unwrap_err().code,
            CODE_TRANSLATION_MISSING
        );
        assert_eq!(
            validate_translations(&[Tr("en", "  ")]).unwrap_err().code,
            CODE_TRANSLATION_MISSING
        );
        assert_eq!(
            validate_translations(&[Tr("fr", "Web")]).unwrap_err().code,
            CODE_LOCALE_UNSUPPORTED
        );
        assert_eq!(
            validate_translations(&[Tr("en", "Web"), Tr("en", "Site")]).unwrap_err().code,
            CODE_LOCALE_DUPLICATE
        );
    }

    #[derive(Validate)]
    struct Form {
        #[validate(custom(function = "validate_not_blank"))]
        name: String,
        #[validate(email(code = "email"))]
        email: String,
    }

    #[test]
    fn test_field_codes() {
        let form = Form {
            name: " ".into(),
            email: "not-an-email".into(),
        };
        let errors = form.validate().unwrap_err();
        let codes = field_codes(&errors);
        assert_eq!(codes.get("name").map(String::as_str), Some(CODE_REQUIRED));
        assert_eq!(codes.get("email").map(String::as_str), Some("email"));
    }
}
