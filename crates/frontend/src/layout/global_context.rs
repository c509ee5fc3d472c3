use contracts::enums::EntityKind;
use contracts::shared::locale::Locale;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// What the main area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Public landing page
    Site,
    Dashboard,
    Entity(EntityKind),
}

impl Section {
    pub fn code(&self) -> &'static str {
        match self {
            Section::Site => "site",
            Section::Dashboard => "dashboard",
            Section::Entity(kind) => kind.code(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "site" => Some(Section::Site),
            "dashboard" => Some(Section::Dashboard),
            other => EntityKind::from_code(other).map(Section::Entity),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Section::Site)
    }
}

fn query_params() -> HashMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Section and locale to restore from `?section=..&lang=..`
fn parse_params(params: &HashMap<String, String>) -> (Option<Section>, Option<Locale>) {
    (
        params.get("section").and_then(|s| Section::from_code(s)),
        params.get("lang").and_then(|l| Locale::from_code(l)),
    )
}

fn params_query(section: Section, locale: Locale) -> String {
    let params = HashMap::from([
        ("section".to_string(), section.code().to_string()),
        ("lang".to_string(), locale.code().to_string()),
    ]);
    serde_qs::to_string(&params).unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub locale: RwSignal<Locale>,
    pub section: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(default_locale),
            section: RwSignal::new(Section::Site),
            left_open: RwSignal::new(true),
        }
    }

    pub fn locale_signal(&self) -> Signal<Locale> {
        self.locale.into()
    }

    pub fn set_locale(&self, locale: Locale) {
        log::debug!("locale -> {}", locale.code());
        self.locale.set(locale);
    }

    pub fn navigate(&self, section: Section) {
        self.section.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn init_router_integration(&self) {
        let (section, locale) = parse_params(&query_params());
        if let Some(section) = section {
            self.section.set(section);
        }
        if let Some(locale) = locale {
            self.locale.set(locale);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", params_query(this.section.get(), this.locale.get()));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Keep `<html lang dir>` in step with the active locale
    pub fn init_document_direction(&self) {
        let locale = self.locale;
        Effect::new(move |_| {
            let locale = locale.get();
            let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let _ = root.set_attribute("lang", locale.code());
            let _ = root.set_attribute("dir", locale.dir());
        });
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_codes() {
        for kind in EntityKind::all() {
            let section = Section::Entity(kind);
            assert_eq!(Section::from_code(section.code()), Some(section));
        }
        assert_eq!(Section::from_code("dashboard"), Some(Section::Dashboard));
        assert_eq!(Section::from_code("reports"), None);
        assert!(!Section::Site.requires_auth());
        assert!(Section::Entity(EntityKind::Contact).requires_auth());
    }

    #[test]
    fn test_params_round_trip() {
        let query = params_query(Section::Entity(EntityKind::InquiryType), Locale::Ar);
        let params: HashMap<String, String> = serde_qs::from_str(&query).unwrap();
        assert_eq!(
            parse_params(&params),
            (Some(Section::Entity(EntityKind::InquiryType)), Some(Locale::Ar))
        );
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let params: HashMap<String, String> =
            serde_qs::from_str("section=ledger&lang=fr").unwrap();
        assert_eq!(parse_params(&params), (None, None));
    }
}
