//! Configured site locales (`site_languages` setting) and locale resolution.

pub mod sync;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::repository::PortfolioRepository;

pub const SITE_LANGUAGES_SETTING: &str = "site_languages";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteLocale {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flag: String,
}

/// Ordered list of locale codes the site serves. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLocales {
    codes: Vec<String>,
}

impl SiteLocales {
    pub fn new(codes: Vec<String>, default_locale: &str) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for code in codes {
            let code = code.trim().to_string();
            if !code.is_empty() && !unique.contains(&code) {
                unique.push(code);
            }
        }
        if unique.is_empty() {
            unique.push(default_locale.to_string());
        }
        Self { codes: unique }
    }

    /// Parses the `site_languages` JSON value (`[{code, name, flag}]`).
    /// Missing or malformed values yield `[default_locale]`.
    pub fn from_setting(value: Option<&str>, default_locale: &str) -> Self {
        let codes = value
            .and_then(|v| match serde_json::from_str::<Vec<SiteLocale>>(v) {
                Ok(list) => Some(list.into_iter().map(|l| l.code).collect()),
                Err(e) => {
                    warn!("Invalid {SITE_LANGUAGES_SETTING} setting: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Self::new(codes, default_locale)
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// The requested locale when configured, otherwise the first configured one.
    pub fn resolve(&self, requested: Option<&str>) -> &str {
        match requested.and_then(|r| self.codes.iter().find(|c| c.as_str() == r)) {
            Some(code) => code,
            None => &self.codes[0],
        }
    }
}

/// Loads the configured site locales. A failing lookup degrades to the default.
pub async fn load_site_locales(
    repo: &dyn PortfolioRepository,
    default_locale: &str,
) -> SiteLocales {
    match repo.setting(SITE_LANGUAGES_SETTING).await {
        Ok(value) => SiteLocales::from_setting(value.as_deref(), default_locale),
        Err(e) => {
            warn!("Could not load {SITE_LANGUAGES_SETTING}: {e}");
            SiteLocales::new(vec![], default_locale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTING: &str = r#"[
        {"code": "ru", "name": "Русский", "flag": "🇷🇺"},
        {"code": "en", "name": "English", "flag": "🇺🇸"},
        {"code": "zh", "name": "中文", "flag": "🇨🇳"}
    ]"#;

    #[test]
    fn test_resolve_known_locale() {
        let locales = SiteLocales::from_setting(Some(SETTING), "en");
        assert_eq!(locales.resolve(Some("zh")), "zh");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_first_configured() {
        let locales = SiteLocales::from_setting(Some(SETTING), "en");
        assert_eq!(locales.resolve(Some("de")), "ru");
        assert_eq!(locales.resolve(None), "ru");
    }

    #[test]
    fn test_missing_or_invalid_setting_uses_default() {
        assert_eq!(SiteLocales::from_setting(None, "en").codes(), ["en"]);
        assert_eq!(SiteLocales::from_setting(Some("not json"), "en").codes(), ["en"]);
        assert_eq!(SiteLocales::from_setting(Some("[]"), "fr").codes(), ["fr"]);
    }

    #[test]
    fn test_duplicates_and_blanks_dropped() {
        let locales = SiteLocales::new(
            vec!["en".into(), " ".into(), "en".into(), "ru".into()],
            "en",
        );
        assert_eq!(locales.codes(), ["en", "ru"]);
    }
}
