//! Public site configuration: settings object and UI translations.

use serde_json::{json, Map, Value};
use tracing::warn;

use crate::models::site::{SettingRow, TranslationRow};

pub mod handlers;

/// Settings stored as JSON text and served decoded.
pub const JSON_SETTINGS: &[&str] = &["site_languages", "available_languages"];

fn default_languages() -> Value {
    json!([{"code": "en", "name": "English", "flag": "🇺🇸"}])
}

/// Flattens settings into one object. JSON-valued settings that fail to
/// parse fall back to an English-only language list.
pub fn settings_object(rows: Vec<SettingRow>) -> Map<String, Value> {
    rows.into_iter()
        .map(|row| {
            let value = if JSON_SETTINGS.contains(&row.name.as_str()) {
                serde_json::from_str(&row.value).unwrap_or_else(|e| {
                    warn!("Setting '{}' is not valid JSON: {e}", row.name);
                    default_languages()
                })
            } else {
                Value::String(row.value)
            };
            (row.name, value)
        })
        .collect()
}

pub fn translations_object(rows: Vec<TranslationRow>) -> Map<String, Value> {
    rows.into_iter()
        .map(|row| (row.key, Value::String(row.value)))
        .collect()
}
