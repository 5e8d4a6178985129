//! In-memory `PortfolioRepository` for unit and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::chat::NewChatLog;
use crate::models::content::{
    CertificateRow, ContactRow, EducationRow, ExperienceRow, ProfileRow, ProjectRow, SkillRow,
    SpokenLanguageRow,
};
use crate::models::site::{
    MonthName, NewVisit, PresentMarker, SettingRow, TranslationRow, PRESENT_KEY,
};
use crate::repository::{CloneReport, PortfolioRepository, RepositoryError, SECRET_SETTINGS};

#[derive(Debug, Default, Clone)]
pub struct Store {
    pub settings: Vec<SettingRow>,
    pub profiles: Vec<ProfileRow>,
    pub experiences: Vec<ExperienceRow>,
    pub skills: Vec<SkillRow>,
    pub education: Vec<EducationRow>,
    pub certificates: Vec<CertificateRow>,
    pub projects: Vec<ProjectRow>,
    pub spoken_languages: Vec<SpokenLanguageRow>,
    pub contacts: Vec<ContactRow>,
    pub translations: Vec<TranslationRow>,
    pub chat_logs: Vec<NewChatLog>,
    pub visits: Vec<(NewVisit, u32)>,
    /// Every read fails with `RepositoryError::Unavailable`.
    pub fail_reads: bool,
    /// `append_chat_log` fails.
    pub fail_chat_log: bool,
    /// `record_visit` fails.
    pub fail_visits: bool,
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: Mutex<Store>,
    next_id: Mutex<i64>,
}

impl InMemoryRepository {
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
            next_id: Mutex::new(10_000),
        }
    }

    pub fn snapshot(&self) -> Store {
        self.store.lock().unwrap().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut Store)) {
        f(&mut self.store.lock().unwrap());
    }

    fn read(&self) -> Result<std::sync::MutexGuard<'_, Store>, RepositoryError> {
        let store = self.store.lock().unwrap();
        if store.fail_reads {
            return Err(RepositoryError::Unavailable("simulated read failure".into()));
        }
        Ok(store)
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }
}

fn in_locale<T: Clone>(rows: &[T], locale: &str, row_locale: impl Fn(&T) -> &str) -> Vec<T> {
    rows.iter()
        .filter(|r| row_locale(r) == locale)
        .cloned()
        .collect()
}

#[async_trait]
impl PortfolioRepository for InMemoryRepository {
    async fn setting(&self, name: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .read()?
            .settings
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.clone()))
    }

    async fn public_settings(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        let mut rows: Vec<SettingRow> = self
            .read()?
            .settings
            .iter()
            .filter(|s| !SECRET_SETTINGS.contains(&s.name.as_str()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn profile(&self, locale: &str) -> Result<Option<ProfileRow>, RepositoryError> {
        Ok(self
            .read()?
            .profiles
            .iter()
            .find(|p| p.locale == locale)
            .cloned())
    }

    async fn experiences(&self, locale: &str) -> Result<Vec<ExperienceRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.experiences, locale, |r| &r.locale);
        rows.sort_by(|a, b| {
            (a.sort_order, &b.start_label, a.id).cmp(&(b.sort_order, &a.start_label, b.id))
        });
        Ok(rows)
    }

    async fn skills(&self, locale: &str) -> Result<Vec<SkillRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.skills, locale, |r| &r.locale);
        rows.sort_by(|a, b| {
            (&a.category_key, a.sort_order, &a.name).cmp(&(&b.category_key, b.sort_order, &b.name))
        });
        Ok(rows)
    }

    async fn education(&self, locale: &str) -> Result<Vec<EducationRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.education, locale, |r| &r.locale);
        rows.sort_by(|a, b| (a.sort_order, &b.year, a.id).cmp(&(b.sort_order, &a.year, b.id)));
        Ok(rows)
    }

    async fn certificates(&self, locale: &str) -> Result<Vec<CertificateRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.certificates, locale, |r| &r.locale);
        rows.sort_by(|a, b| (a.sort_order, &a.name).cmp(&(b.sort_order, &b.name)));
        Ok(rows)
    }

    async fn projects(&self, locale: &str) -> Result<Vec<ProjectRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.projects, locale, |r| &r.locale);
        rows.sort_by(|a, b| (a.sort_order, &a.code).cmp(&(b.sort_order, &b.code)));
        Ok(rows)
    }

    async fn spoken_languages(
        &self,
        locale: &str,
    ) -> Result<Vec<SpokenLanguageRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.spoken_languages, locale, |r| &r.locale);
        rows.sort_by(|a, b| (a.sort_order, &a.name).cmp(&(b.sort_order, &b.name)));
        Ok(rows)
    }

    async fn contacts(&self, locale: &str) -> Result<Vec<ContactRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.contacts, locale, |r| &r.locale);
        rows.sort_by_key(|r| (r.sort_order, r.id));
        Ok(rows)
    }

    async fn translations(&self, locale: &str) -> Result<Vec<TranslationRow>, RepositoryError> {
        let mut rows = in_locale(&self.read()?.translations, locale, |r| &r.locale);
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(rows)
    }

    async fn translation(
        &self,
        key: &str,
        locale: &str,
    ) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .read()?
            .translations
            .iter()
            .find(|t| t.key == key && t.locale == locale)
            .map(|t| t.value.clone()))
    }

    async fn month_names(&self) -> Result<Vec<MonthName>, RepositoryError> {
        let mut rows = self.read()?.translations.clone();
        rows.sort_by(|a, b| (&a.locale, &a.key).cmp(&(&b.locale, &b.key)));
        Ok(rows.iter().filter_map(MonthName::from_translation).collect())
    }

    async fn present_markers(&self) -> Result<Vec<PresentMarker>, RepositoryError> {
        Ok(self
            .read()?
            .translations
            .iter()
            .filter(|t| t.key == PRESENT_KEY)
            .map(|t| PresentMarker {
                locale: t.locale.clone(),
                text: t.value.clone(),
            })
            .collect())
    }

    async fn append_chat_log(&self, entry: NewChatLog) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().unwrap();
        if store.fail_chat_log {
            return Err(RepositoryError::Unavailable("simulated write failure".into()));
        }
        store.chat_logs.push(entry);
        Ok(())
    }

    async fn record_visit(&self, visit: NewVisit) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().unwrap();
        if store.fail_visits {
            return Err(RepositoryError::Unavailable("simulated write failure".into()));
        }
        match store
            .visits
            .iter_mut()
            .find(|(v, _)| v.session_id == visit.session_id)
        {
            Some((_, hits)) => *hits += 1,
            None => store.visits.push((visit, 1)),
        }
        Ok(())
    }

    async fn content_locales(&self) -> Result<Vec<String>, RepositoryError> {
        let mut locales: Vec<String> = self
            .read()?
            .profiles
            .iter()
            .map(|p| p.locale.clone())
            .collect();
        locales.sort();
        locales.dedup();
        Ok(locales)
    }

    async fn clone_locale(
        &self,
        source: &str,
        target: &str,
    ) -> Result<CloneReport, RepositoryError> {
        let mut report = CloneReport::default();
        let snapshot = self.read()?.clone();
        let mut store = self.store.lock().unwrap();

        macro_rules! clone_if_empty {
            ($field:ident, $count:ident) => {
                if !snapshot.$field.iter().any(|r| r.locale == target) {
                    for row in snapshot.$field.iter().filter(|r| r.locale == source) {
                        let mut copy = row.clone();
                        copy.id = self.next_id();
                        copy.locale = target.to_string();
                        store.$field.push(copy);
                        report.$count += 1;
                    }
                }
            };
        }

        clone_if_empty!(profiles, profiles);
        clone_if_empty!(experiences, experiences);
        clone_if_empty!(skills, skills);
        clone_if_empty!(education, education);
        clone_if_empty!(certificates, certificates);
        clone_if_empty!(spoken_languages, spoken_languages);
        clone_if_empty!(contacts, contacts);

        for row in snapshot.projects.iter().filter(|r| r.locale == source) {
            if snapshot
                .projects
                .iter()
                .any(|p| p.locale == target && p.code == row.code)
            {
                continue;
            }
            let mut copy = row.clone();
            copy.id = self.next_id();
            copy.locale = target.to_string();
            store.projects.push(copy);
            report.projects += 1;
        }

        for row in snapshot.translations.iter().filter(|r| r.locale == source) {
            if snapshot
                .translations
                .iter()
                .any(|t| t.locale == target && t.key == row.key)
            {
                continue;
            }
            store.translations.push(TranslationRow {
                locale: target.to_string(),
                ..row.clone()
            });
            report.translations += 1;
        }

        Ok(report)
    }
}
