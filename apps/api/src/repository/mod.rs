//! Data access: the single seam between request handling and storage.
//!
//! The aggregator, the chat orchestrator and the background jobs depend on
//! `PortfolioRepository` only. Nothing in this module depends on them.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::chat::NewChatLog;
use crate::models::content::{
    CertificateRow, ContactRow, EducationRow, ExperienceRow, ProfileRow, ProjectRow, SkillRow,
    SpokenLanguageRow,
};
use crate::models::site::{MonthName, NewVisit, PresentMarker, SettingRow, TranslationRow};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgRepository;

/// Settings that must never leave the server.
pub const SECRET_SETTINGS: &[&str] = &["gemini_api_key"];

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Data store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepositoryError {
    /// Pool exhaustion and shutdown mean the store is unreachable, not that a
    /// query was wrong.
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                RepositoryError::Unavailable(e.to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}

/// Row counts produced by cloning one locale's content into another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneReport {
    pub profiles: u64,
    pub experiences: u64,
    pub skills: u64,
    pub education: u64,
    pub certificates: u64,
    pub projects: u64,
    pub spoken_languages: u64,
    pub contacts: u64,
    pub translations: u64,
}

impl CloneReport {
    pub fn total(&self) -> u64 {
        self.profiles
            + self.experiences
            + self.skills
            + self.education
            + self.certificates
            + self.projects
            + self.spoken_languages
            + self.contacts
            + self.translations
    }
}

/// Typed queries over the portfolio store.
///
/// Collection queries return rows of one locale ordered by `sort_order`, ties
/// broken by a natural key. Callers must not assume the order values are dense.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn setting(&self, name: &str) -> Result<Option<String>, RepositoryError>;

    /// All settings except [`SECRET_SETTINGS`].
    async fn public_settings(&self) -> Result<Vec<SettingRow>, RepositoryError>;

    async fn profile(&self, locale: &str) -> Result<Option<ProfileRow>, RepositoryError>;

    async fn experiences(&self, locale: &str) -> Result<Vec<ExperienceRow>, RepositoryError>;

    /// Ordered by `(category_key, sort_order, name)`.
    async fn skills(&self, locale: &str) -> Result<Vec<SkillRow>, RepositoryError>;

    async fn education(&self, locale: &str) -> Result<Vec<EducationRow>, RepositoryError>;

    async fn certificates(&self, locale: &str) -> Result<Vec<CertificateRow>, RepositoryError>;

    async fn projects(&self, locale: &str) -> Result<Vec<ProjectRow>, RepositoryError>;

    async fn spoken_languages(
        &self,
        locale: &str,
    ) -> Result<Vec<SpokenLanguageRow>, RepositoryError>;

    async fn contacts(&self, locale: &str) -> Result<Vec<ContactRow>, RepositoryError>;

    async fn translations(&self, locale: &str) -> Result<Vec<TranslationRow>, RepositoryError>;

    async fn translation(
        &self,
        key: &str,
        locale: &str,
    ) -> Result<Option<String>, RepositoryError>;

    /// Month names of every locale, both forms.
    async fn month_names(&self) -> Result<Vec<MonthName>, RepositoryError>;

    /// Present markers of every locale.
    async fn present_markers(&self) -> Result<Vec<PresentMarker>, RepositoryError>;

    /// Append-only.
    async fn append_chat_log(&self, entry: NewChatLog) -> Result<(), RepositoryError>;

    /// Inserts a visit, or bumps `last_visit` when the session is already known.
    async fn record_visit(&self, visit: NewVisit) -> Result<(), RepositoryError>;

    /// Locales that currently have any profile row.
    async fn content_locales(&self) -> Result<Vec<String>, RepositoryError>;

    /// Copies every locale-partitioned row from `source` to `target`, skipping
    /// rows whose unique key already exists under `target`.
    async fn clone_locale(&self, source: &str, target: &str)
        -> Result<CloneReport, RepositoryError>;
}
