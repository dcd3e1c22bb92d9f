use std::sync::OnceLock;

use shared::DisplayLocale;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Client settings, baked in at build time from `GOBARBER_API_URL` and
/// `GOBARBER_LOCALE`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub locale: DisplayLocale,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GOBARBER_API_URL"), option_env!("GOBARBER_LOCALE"))
    }

    pub fn from_values(api_url: Option<&str>, locale: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let locale = match locale.map(str::parse::<DisplayLocale>) {
            Some(Ok(locale)) => locale,
            Some(Err(e)) => {
                tracing::warn!("{}, falling back to {}", e, DisplayLocale::default());
                DisplayLocale::default()
            }
            None => DisplayLocale::default(),
        };

        Self {
            api_base_url,
            locale,
        }
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.locale, DisplayLocale::EnUs);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://api.gobarber.dev/"), Some("pt-BR"));
        assert_eq!(config.api_base_url, "https://api.gobarber.dev");
        assert_eq!(config.locale, DisplayLocale::PtBr);
    }

    #[test]
    fn test_blank_url_and_unknown_locale_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("xx"));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.locale, DisplayLocale::EnUs);
    }
}
