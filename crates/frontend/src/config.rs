use contracts::shared::locale::Locale;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

use crate::shared::retry::RetryPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub retry: RetryPolicy,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port used when the base URL is derived from `window.location`
    pub port: u16,
    /// Explicit base URL; wins over the derived one when not empty
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub default_locale: Locale,
    pub default_limit: u32,
    pub page_size_options: Vec<u32>,
    /// Delay before a search input is applied to the list query
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[ui]
default_locale = "en"
default_limit = 10
page_size_options = [5, 10, 25, 50]
search_debounce_ms = 300

[retry]
max_retries = 2
base_delay_ms = 500
max_delay_ms = 2000

[notifications]
timeout_ms = 4000
"#;

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;
        if config.ui.default_limit == 0 {
            return Err(ConfigError::Invalid("ui.default_limit must be positive".into()));
        }
        if !config.ui.page_size_options.contains(&config.ui.default_limit) {
            config.ui.page_size_options.push(config.ui.default_limit);
            config.ui.page_size_options.sort_unstable();
        }
        config.api.base_url = config
            .api
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Ok(config)
    }

    /// Embedded defaults with the compile-time `PORTFOLIO_API_BASE` override applied
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::parse(DEFAULT_CONFIG)?;
        if let Some(base) = option_env!("PORTFOLIO_API_BASE") {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                config.api.base_url = Some(base.to_string());
            }
        }
        Ok(config)
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first use
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; falling back to built-in defaults", e);
            AppConfig::fallback()
        }
    })
}

impl AppConfig {
    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                base_url: None,
            },
            ui: UiConfig {
                default_locale: Locale::En,
                default_limit: 10,
                page_size_options: vec![5, 10, 25, 50],
                search_debounce_ms: 300,
            },
            retry: RetryPolicy::default(),
            notifications: NotificationConfig { timeout_ms: 4000 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.ui.default_locale, Locale::En);
        assert_eq!(config.ui.default_limit, 10);
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config, AppConfig::fallback());
    }

    #[test]
    fn test_default_limit_joins_page_sizes() {
        let contents = DEFAULT_CONFIG.replace("default_limit = 10", "default_limit = 20");
        let config = AppConfig::parse(&contents).unwrap();
        assert_eq!(config.ui.page_size_options, vec![5, 10, 20, 25, 50]);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let contents = DEFAULT_CONFIG.replace("default_limit = 10", "default_limit = 0");
        assert!(matches!(
            AppConfig::parse(&contents),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_base_url_trimmed() {
        let contents = DEFAULT_CONFIG.replace(
            "port = 3000",
            "port = 3000\nbase_url = \"https://api.example.com/ \"",
        );
        let config = AppConfig::parse(&contents).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://api.example.com"));
    }
}
