//! Flattened Markdown-like résumé document used as chat grounding.

use crate::repository::{PortfolioRepository, RepositoryError};
use crate::resume::content::{load_content, ResumeContent};
use crate::resume::skills::group_skills;

/// Builds the resume context text for `locale`.
pub async fn build_resume_context(
    repo: &dyn PortfolioRepository,
    locale: &str,
) -> Result<String, RepositoryError> {
    let content = load_content(repo, locale).await?;
    Ok(render_resume_context(&content))
}

/// Renders content as text. Empty collections produce no section at all.
pub fn render_resume_context(content: &ResumeContent) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(profile) = &content.profile {
        parts.push(format!("# {}", profile.full_name()));
        if !profile.headline.is_empty() {
            parts.push(format!("**{}**", profile.headline));
        }
        if !profile.short_description.is_empty() {
            parts.push(format!("\n{}", profile.short_description));
        }
        if !profile.bio.is_empty() {
            parts.push(format!("\n## About\n{}", profile.bio));
        }
    }

    if !content.experiences.is_empty() {
        parts.push("\n## Experience".to_string());
        for exp in &content.experiences {
            parts.push(format!("\n### {} at {}", exp.position, exp.company));
            parts.push(format!("{} - {}", exp.start_label, exp.end_label));
            if !exp.description.is_empty() {
                parts.push(exp.description.clone());
            }
        }
    }

    if !content.skills.is_empty() {
        parts.push("\n## Skills".to_string());
        for category in group_skills(&content.skills) {
            parts.push(format!("\n**{}:**", category.name));
            for skill in category.skills {
                parts.push(format!("- {}", skill.name));
            }
        }
    }

    if !content.education.is_empty() {
        parts.push("\n## Education".to_string());
        for edu in &content.education {
            let faculty = if edu.faculty.is_empty() {
                String::new()
            } else {
                format!(" - {}", edu.faculty)
            };
            let location = if edu.location.is_empty() {
                String::new()
            } else {
                format!(", {}", edu.location)
            };
            parts.push(format!(
                "- {}{} at {}{} ({})",
                edu.degree, faculty, edu.institution, location, edu.year
            ));
        }
    }

    if !content.certificates.is_empty() {
        parts.push("\n## Certificates".to_string());
        for cert in &content.certificates {
            if cert.year.is_empty() {
                parts.push(format!("- {}", cert.name));
            } else {
                parts.push(format!("- {} ({})", cert.name, cert.year));
            }
        }
    }

    if !content.projects.is_empty() {
        parts.push("\n## Projects".to_string());
        for project in &content.projects {
            parts.push(format!("\n### {}", project.title));
            if !project.description.is_empty() {
                parts.push(project.description.clone());
            }
            if !project.technologies.is_empty() {
                parts.push(format!("Technologies: {}", project.technologies.join(", ")));
            }
        }
    }

    if !content.languages.is_empty() {
        parts.push("\n## Languages".to_string());
        for lang in &content.languages {
            parts.push(format!("- {}: {}", lang.name, lang.level));
        }
    }

    if !content.contacts.is_empty() {
        parts.push("\n## Contact".to_string());
        for contact in &content.contacts {
            parts.push(format!("- {}: {}", contact.label, contact.value));
        }
    }

    parts.join("\n")
}
