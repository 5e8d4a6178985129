use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::chat::NewChatLog;
use crate::models::content::{
    CertificateRow, ContactRow, EducationRow, ExperienceRow, ProfileRow, ProjectRow, SkillRow,
    SpokenLanguageRow,
};
use crate::models::site::{
    MonthName, NewVisit, PresentMarker, SettingRow, TranslationRow, PRESENT_KEY,
};
use crate::repository::{CloneReport, PortfolioRepository, RepositoryError, SECRET_SETTINGS};

/// `PortfolioRepository` backed by PostgreSQL.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PgRepository {
    async fn setting(&self, name: &str) -> Result<Option<String>, RepositoryError> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn public_settings(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        let secrets: Vec<String> = SECRET_SETTINGS.iter().map(|s| s.to_string()).collect();
        Ok(sqlx::query_as::<_, SettingRow>(
            "SELECT name, value FROM settings WHERE NOT (name = ANY($1)) ORDER BY name",
        )
        .bind(&secrets)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn profile(&self, locale: &str) -> Result<Option<ProfileRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, locale, first_name, last_name, headline, short_description, bio
            FROM profiles
            WHERE locale = $1
            "#,
        )
        .bind(locale)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn experiences(&self, locale: &str) -> Result<Vec<ExperienceRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT id, locale, company, position, start_label, end_label, description, sort_order
            FROM experiences
            WHERE locale = $1
            ORDER BY sort_order, start_label DESC, id
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn skills(&self, locale: &str) -> Result<Vec<SkillRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT id, locale, name, category_name, category_key, category_color, sort_order
            FROM skills
            WHERE locale = $1
            ORDER BY category_key, sort_order, name
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn education(&self, locale: &str) -> Result<Vec<EducationRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, EducationRow>(
            r#"
            SELECT id, locale, institution, location, degree, faculty, year, sort_order
            FROM education
            WHERE locale = $1
            ORDER BY sort_order, year DESC, id
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn certificates(&self, locale: &str) -> Result<Vec<CertificateRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, CertificateRow>(
            r#"
            SELECT id, locale, name, year, sort_order
            FROM certificates
            WHERE locale = $1
            ORDER BY sort_order, name
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn projects(&self, locale: &str) -> Result<Vec<ProjectRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, locale, code, title, description, technologies, link, sort_order
            FROM projects
            WHERE locale = $1
            ORDER BY sort_order, code
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn spoken_languages(
        &self,
        locale: &str,
    ) -> Result<Vec<SpokenLanguageRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, SpokenLanguageRow>(
            r#"
            SELECT id, locale, name, level, proficiency, sort_order
            FROM spoken_languages
            WHERE locale = $1
            ORDER BY sort_order, name
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn contacts(&self, locale: &str) -> Result<Vec<ContactRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, locale, kind, label, value, link, sort_order
            FROM contacts
            WHERE locale = $1
            ORDER BY sort_order, id
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn translations(&self, locale: &str) -> Result<Vec<TranslationRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, TranslationRow>(
            "SELECT key, locale, value FROM translations WHERE locale = $1 ORDER BY key",
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn translation(
        &self,
        key: &str,
        locale: &str,
    ) -> Result<Option<String>, RepositoryError> {
        Ok(sqlx::query_scalar::<_, String>(
            "SELECT value FROM translations WHERE key = $1 AND locale = $2",
        )
        .bind(key)
        .bind(locale)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn month_names(&self) -> Result<Vec<MonthName>, RepositoryError> {
        let rows = sqlx::query_as::<_, TranslationRow>(
            r#"
            SELECT key, locale, value
            FROM translations
            WHERE key LIKE 'month\_%'
            ORDER BY locale, key
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().filter_map(MonthName::from_translation).collect())
    }

    async fn present_markers(&self) -> Result<Vec<PresentMarker>, RepositoryError> {
        let rows = sqlx::query_as::<_, TranslationRow>(
            "SELECT key, locale, value FROM translations WHERE key = $1 ORDER BY locale",
        )
        .bind(PRESENT_KEY)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| PresentMarker {
                locale: r.locale,
                text: r.value,
            })
            .collect())
    }

    async fn append_chat_log(&self, entry: NewChatLog) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO chat_logs (session_id, user_message, ai_response, locale)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&entry.session_id)
        .bind(&entry.user_message)
        .bind(&entry.ai_response)
        .bind(&entry.locale)
        .execute(&self.pool)
        .await?;

        debug!("Chat log appended for session {}", entry.session_id);
        Ok(())
    }

    async fn record_visit(&self, visit: NewVisit) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO visits (session_id, ip_address, user_agent, referer, page)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (session_id) DO UPDATE SET last_visit = NOW()
            "#,
        )
        .bind(&visit.session_id)
        .bind(&visit.ip_address)
        .bind(&visit.user_agent)
        .bind(&visit.referer)
        .bind(&visit.page)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn content_locales(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT locale FROM profiles ORDER BY locale")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn clone_locale(
        &self,
        source: &str,
        target: &str,
    ) -> Result<CloneReport, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let mut report = CloneReport::default();

        report.profiles = sqlx::query(
            r#"
            INSERT INTO profiles (locale, first_name, last_name, headline, short_description, bio)
            SELECT $2, first_name, last_name, headline, short_description, bio
            FROM profiles
            WHERE locale = $1
              AND NOT EXISTS (SELECT 1 FROM profiles WHERE locale = $2)
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        // Collections without a natural unique key are copied only into an
        // empty target, so a re-run never duplicates them.
        report.experiences = sqlx::query(
            r#"
            INSERT INTO experiences
                (locale, company, position, start_label, end_label, description, sort_order)
            SELECT $2, company, position, start_label, end_label, description, sort_order
            FROM experiences
            WHERE locale = $1
              AND NOT EXISTS (SELECT 1 FROM experiences WHERE locale = $2)
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        report.skills = sqlx::query(
            r#"
            INSERT INTO skills
                (locale, name, category_name, category_key, category_color, sort_order)
            SELECT $2, name, category_name, category_key, category_color, sort_order
            FROM skills
            WHERE locale = $1
              AND NOT EXISTS (SELECT 1 FROM skills WHERE locale = $2)
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        report.education = sqlx::query(
            r#"
            INSERT INTO education
                (locale, institution, location, degree, faculty, year, sort_order)
            SELECT $2, institution, location, degree, faculty, year, sort_order
            FROM education
            WHERE locale = $1
              AND NOT EXISTS (SELECT 1 FROM education WHERE locale = $2)
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        report.certificates = sqlx::query(
            r#"
            INSERT INTO certificates (locale, name, year, sort_order)
            SELECT $2, name, year, sort_order
            FROM certificates
            WHERE locale = $1
              AND NOT EXISTS (SELECT 1 FROM certificates WHERE locale = $2)
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        report.projects = sqlx::query(
            r#"
            INSERT INTO projects
                (locale, code, title, description, technologies, link, sort_order)
            SELECT $2, code, title, description, technologies, link, sort_order
            FROM projects
            WHERE locale = $1
            ON CONFLICT (code, locale) DO NOTHING
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        report.spoken_languages = sqlx::query(
            r#"
            INSERT INTO spoken_languages (locale, name, level, proficiency, sort_order)
            SELECT $2, name, level, proficiency, sort_order
            FROM spoken_languages
            WHERE locale = $1
              AND NOT EXISTS (SELECT 1 FROM spoken_languages WHERE locale = $2)
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        report.contacts = sqlx::query(
            r#"
            INSERT INTO contacts (locale, kind, label, value, link, sort_order)
            SELECT $2, kind, label, value, link, sort_order
            FROM contacts
            WHERE locale = $1
              AND NOT EXISTS (SELECT 1 FROM contacts WHERE locale = $2)
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        report.translations = sqlx::query(
            r#"
            INSERT INTO translations (key, locale, value)
            SELECT key, $2, value
            FROM translations
            WHERE locale = $1
            ON CONFLICT (key, locale) DO NOTHING
            "#,
        )
        .bind(source)
        .bind(target)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        info!(
            "Cloned {} rows from locale '{}' to '{}'",
            report.total(),
            source,
            target
        );
        Ok(report)
    }
}
