//! Site-level rows: settings, UI translations, parsing vocabularies and visits.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct SettingRow {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct TranslationRow {
    pub key: String,
    pub locale: String,
    pub value: String,
}

/// Which spelling of a month a translation row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthForm {
    Full,
    Short,
}

/// One locale's name for a calendar month, e.g. ("ru", 8, "Авг", Short).
#[derive(Debug, Clone, PartialEq)]
pub struct MonthName {
    pub locale: String,
    /// 1 – 12
    pub month: u32,
    pub form: MonthForm,
    pub text: String,
}

impl MonthName {
    /// Parses a translation row keyed `month_<n>_full` / `month_<n>_short`.
    /// Returns `None` for any other key or an index outside 1 – 12.
    pub fn from_translation(row: &TranslationRow) -> Option<Self> {
        let rest = row.key.strip_prefix("month_")?;
        let (index, form) = if let Some(n) = rest.strip_suffix("_full") {
            (n, MonthForm::Full)
        } else if let Some(n) = rest.strip_suffix("_short") {
            (n, MonthForm::Short)
        } else {
            return None;
        };
        let month: u32 = index.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(MonthName {
            locale: row.locale.clone(),
            month,
            form,
            text: row.value.clone(),
        })
    }
}

/// Locale-specific literal meaning "currently ongoing" ("Present", "Настоящее время").
#[derive(Debug, Clone, PartialEq)]
pub struct PresentMarker {
    pub locale: String,
    pub text: String,
}

/// Translation key holding present markers.
pub const PRESENT_KEY: &str = "present";

#[derive(Debug, Clone, PartialEq)]
pub struct NewVisit {
    pub session_id: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: Option<String>,
    pub page: String,
}
