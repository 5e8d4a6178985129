//! Resume payload for the frontend: one locale's content plus the profile of
//! every configured locale, skill categories and headline stats.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::locales::SiteLocales;
use crate::models::content::{
    CertificateRow, ContactRow, EducationRow, ExperienceRow, ProjectRow, SpokenLanguageRow,
};
use crate::repository::{PortfolioRepository, RepositoryError};
use crate::resume::content::load_content;
use crate::resume::experience::{estimate_years, YearMonth};
use crate::resume::skills::{group_skills, SkillCategory};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeStats {
    pub years_experience: String,
    pub projects_completed: String,
    pub languages_count: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumePayload {
    pub locale: String,
    pub name: BTreeMap<String, String>,
    pub firstname: BTreeMap<String, String>,
    pub lastname: BTreeMap<String, String>,
    pub resume_title: BTreeMap<String, String>,
    pub resume_description: BTreeMap<String, String>,
    pub about_me: BTreeMap<String, String>,
    pub languages: Vec<SpokenLanguageRow>,
    /// Category key → skill names.
    pub skills: BTreeMap<String, Vec<String>>,
    pub skill_categories: Vec<SkillCategory>,
    pub experiences: Vec<ExperienceRow>,
    pub education: Vec<EducationRow>,
    pub certificates: Vec<CertificateRow>,
    pub projects: Vec<ProjectRow>,
    pub contact_info: Vec<ContactRow>,
    pub stats: ResumeStats,
}

/// Inputs for [`aggregate`].
pub struct AggregateParams<'a> {
    pub site_locales: &'a SiteLocales,
    /// Already resolved against `site_locales`.
    pub locale: &'a str,
    /// Source of truth for the years-of-experience estimate.
    pub canonical_locale: &'a str,
    pub now: YearMonth,
}

/// Builds the full payload. Any data-access failure fails the whole call; no
/// partial payload is ever returned.
pub async fn aggregate(
    repo: &dyn PortfolioRepository,
    params: AggregateParams<'_>,
) -> Result<ResumePayload, RepositoryError> {
    let AggregateParams {
        site_locales,
        locale,
        canonical_locale,
        now,
    } = params;

    let mut payload = ResumePayload {
        locale: locale.to_string(),
        name: BTreeMap::new(),
        firstname: BTreeMap::new(),
        lastname: BTreeMap::new(),
        resume_title: BTreeMap::new(),
        resume_description: BTreeMap::new(),
        about_me: BTreeMap::new(),
        languages: vec![],
        skills: BTreeMap::new(),
        skill_categories: vec![],
        experiences: vec![],
        education: vec![],
        certificates: vec![],
        projects: vec![],
        contact_info: vec![],
        stats: ResumeStats {
            years_experience: String::new(),
            projects_completed: String::new(),
            languages_count: String::new(),
        },
    };

    for code in site_locales.codes() {
        let Some(profile) = repo.profile(code).await? else {
            debug!("No profile for locale '{code}'");
            continue;
        };
        payload.name.insert(code.clone(), profile.full_name());
        payload.firstname.insert(code.clone(), profile.first_name);
        payload.lastname.insert(code.clone(), profile.last_name);
        payload.resume_title.insert(code.clone(), profile.headline);
        payload
            .resume_description
            .insert(code.clone(), profile.short_description);
        payload.about_me.insert(code.clone(), profile.bio);
    }

    let content = load_content(repo, locale).await?;

    for skill in &content.skills {
        payload
            .skills
            .entry(skill.category_key.clone())
            .or_default()
            .push(skill.name.clone());
    }
    payload.skill_categories = group_skills(&content.skills);

    let distinct_projects: HashSet<&str> =
        content.projects.iter().map(|p| p.code.as_str()).collect();
    let distinct_languages: HashSet<&str> =
        content.languages.iter().map(|l| l.name.as_str()).collect();

    payload.stats = ResumeStats {
        years_experience: estimate_years(repo, canonical_locale, now).await?,
        projects_completed: distinct_projects.len().to_string(),
        languages_count: distinct_languages.len().to_string(),
    };

    payload.languages = content.languages;
    payload.experiences = content.experiences;
    payload.education = content.education;
    payload.certificates = content.certificates;
    payload.projects = content.projects;
    payload.contact_info = content.contacts;

    Ok(payload)
}
