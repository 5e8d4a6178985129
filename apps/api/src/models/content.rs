//! Locale-partitioned résumé content rows.
//!
//! Every row belongs to exactly one locale. Field names on the wire follow the
//! frontend's contract (`order`, `start_date`, `href`, ...) while the Rust side
//! keeps names that say what the column holds.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ProfileRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    #[serde(rename = "resume_title")]
    pub headline: String,
    #[serde(rename = "resume_description")]
    pub short_description: String,
    #[serde(rename = "about_me")]
    pub bio: String,
}

impl ProfileRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A work-experience entry. `start_label` / `end_label` are free text such as
/// "Aug 2024" or "Present", never dates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ExperienceRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    pub company: String,
    pub position: String,
    #[serde(rename = "start_date")]
    pub start_label: String,
    #[serde(rename = "end_date")]
    pub end_label: String,
    pub description: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct SkillRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    pub name: String,
    pub category_name: String,
    #[serde(rename = "category_name_key")]
    pub category_key: String,
    pub category_color: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct EducationRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub faculty: String,
    pub year: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CertificateRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    pub name: String,
    pub year: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// `(code, locale)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ProjectRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// A language the portfolio owner speaks. Not to be confused with a content locale.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct SpokenLanguageRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    pub name: String,
    pub level: String,
    /// 0 – 100
    pub proficiency: i16,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ContactRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub value: String,
    #[serde(rename = "href")]
    pub link: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}
