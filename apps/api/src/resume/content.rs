use crate::models::content::{
    CertificateRow, ContactRow, EducationRow, ExperienceRow, ProfileRow, ProjectRow, SkillRow,
    SpokenLanguageRow,
};
use crate::repository::{PortfolioRepository, RepositoryError};

/// Everything published for one locale, each collection in display order.
#[derive(Debug, Clone, Default)]
pub struct ResumeContent {
    pub profile: Option<ProfileRow>,
    pub experiences: Vec<ExperienceRow>,
    pub skills: Vec<SkillRow>,
    pub education: Vec<EducationRow>,
    pub certificates: Vec<CertificateRow>,
    pub projects: Vec<ProjectRow>,
    pub languages: Vec<SpokenLanguageRow>,
    pub contacts: Vec<ContactRow>,
}

/// Loads a locale's content. Any failing query fails the whole load.
pub async fn load_content(
    repo: &dyn PortfolioRepository,
    locale: &str,
) -> Result<ResumeContent, RepositoryError> {
    let (profile, experiences, skills, education, certificates, projects, languages, contacts) =
        tokio::try_join!(
            repo.profile(locale),
            repo.experiences(locale),
            repo.skills(locale),
            repo.education(locale),
            repo.certificates(locale),
            repo.projects(locale),
            repo.spoken_languages(locale),
            repo.contacts(locale),
        )?;

    Ok(ResumeContent {
        profile,
        experiences,
        skills,
        education,
        certificates,
        projects,
        languages,
        contacts,
    })
}
