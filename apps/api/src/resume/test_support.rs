//! Seed data shared by resume, chat and router tests.

use crate::models::content::{
    CertificateRow, ContactRow, EducationRow, ExperienceRow, ProfileRow, ProjectRow, SkillRow,
    SpokenLanguageRow,
};
use crate::models::site::{SettingRow, TranslationRow};
use crate::repository::memory::{InMemoryRepository, Store};

pub const SITE_LANGUAGES: &str = r#"[
    {"code": "en", "name": "English", "flag": "🇺🇸"},
    {"code": "ru", "name": "Русский", "flag": "🇷🇺"}
]"#;

fn profile(locale: &str, first: &str, last: &str, headline: &str) -> ProfileRow {
    ProfileRow {
        id: if locale == "en" { 1 } else { 2 },
        locale: locale.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        headline: headline.to_string(),
        short_description: "Building scalable backends".to_string(),
        bio: "Backend developer and team lead.".to_string(),
    }
}

fn experience(
    id: i64,
    locale: &str,
    company: &str,
    position: &str,
    span: (&str, &str),
    order: i32,
) -> ExperienceRow {
    ExperienceRow {
        id,
        locale: locale.to_string(),
        company: company.to_string(),
        position: position.to_string(),
        start_label: span.0.to_string(),
        end_label: span.1.to_string(),
        description: format!("Work at {company}"),
        sort_order: order,
    }
}

fn skill(id: i64, locale: &str, name: &str, key: &str, category: &str, order: i32) -> SkillRow {
    SkillRow {
        id,
        locale: locale.to_string(),
        name: name.to_string(),
        category_name: category.to_string(),
        category_key: key.to_string(),
        category_color: "from-blue-500 to-cyan-500".to_string(),
        sort_order: order,
    }
}

fn project(id: i64, locale: &str, code: &str, title: &str) -> ProjectRow {
    ProjectRow {
        id,
        locale: locale.to_string(),
        code: code.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        technologies: vec!["Rust".to_string(), "Tokio".to_string()],
        link: "#".to_string(),
        sort_order: id as i32 * 10,
    }
}

fn language(id: i64, locale: &str, name: &str, level: &str) -> SpokenLanguageRow {
    SpokenLanguageRow {
        id,
        locale: locale.to_string(),
        name: name.to_string(),
        level: level.to_string(),
        proficiency: 100,
        sort_order: id as i32 * 10,
    }
}

fn translation(key: &str, locale: &str, value: &str) -> TranslationRow {
    TranslationRow {
        key: key.to_string(),
        locale: locale.to_string(),
        value: value.to_string(),
    }
}

fn setting(name: &str, value: &str) -> SettingRow {
    SettingRow {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Two locales (en, ru) of a small but complete portfolio, with an AI key set.
pub fn seeded_store() -> Store {
    Store {
        settings: vec![
            setting("site_languages", SITE_LANGUAGES),
            setting("theme", "blue"),
            setting("gemini_api_key", "test-key"),
        ],
        profiles: vec![
            profile("en", "Jane", "Doe", "Backend Developer"),
            profile("ru", "Яна", "Доу", "Бекенд разработчик"),
        ],
        experiences: vec![
            experience(1, "en", "Globex", "Team Lead", ("Aug 2024", "Present"), 10),
            experience(2, "en", "Acme", "Engineer", ("Jan 2018", "Jan 2022"), 20),
            experience(3, "en", "Acme", "Engineer", ("Jan 2018", "Jan 2022"), 30),
            experience(4, "ru", "Акме", "Инженер", ("Янв 2018", "Янв 2022"), 10),
        ],
        skills: vec![
            skill(1, "en", "Rust", "backend", "Backend", 20),
            skill(2, "en", "Go", "backend", "Backend", 10),
            skill(3, "en", "React", "frontend", "Frontend", 30),
            skill(4, "ru", "Rust", "backend", "Бекенд", 10),
        ],
        education: vec![EducationRow {
            id: 1,
            locale: "en".to_string(),
            institution: "MIT".to_string(),
            location: "MA".to_string(),
            degree: "BSc".to_string(),
            faculty: "Computer Science".to_string(),
            year: "2016".to_string(),
            sort_order: 10,
        }],
        certificates: vec![CertificateRow {
            id: 1,
            locale: "en".to_string(),
            name: "AWS Solutions Architect".to_string(),
            year: "2021".to_string(),
            sort_order: 10,
        }],
        projects: vec![
            project(1, "en", "alarm", "Simple Alarm"),
            project(2, "en", "text-tools", "AI Text Tools"),
            project(3, "ru", "alarm", "Будильник"),
            project(4, "ru", "text-tools", "ИИ инструменты"),
        ],
        spoken_languages: vec![
            language(1, "en", "English", "Native"),
            language(2, "en", "Russian", "Fluent"),
            language(3, "ru", "Английский", "Родной"),
            language(4, "ru", "Русский", "Свободно"),
        ],
        contacts: vec![ContactRow {
            id: 1,
            locale: "en".to_string(),
            kind: "email".to_string(),
            label: "Email".to_string(),
            value: "jane@example.com".to_string(),
            link: "mailto:jane@example.com".to_string(),
            sort_order: 10,
        }],
        translations: vec![
            translation("present", "en", "Present"),
            translation("present", "ru", "Настоящее время"),
            translation("month_1_short", "en", "Jan"),
            translation("month_8_short", "en", "Aug"),
            translation("month_1_short", "ru", "Янв"),
            translation("month_8_short", "ru", "Авг"),
            translation("aiUnavailable", "en", "The assistant is offline."),
            translation("aiUnavailable", "ru", "Ассистент недоступен."),
            translation("certificates", "en", "Certifications"),
        ],
        ..Store::default()
    }
}

pub fn seeded_repo() -> InMemoryRepository {
    InMemoryRepository::new(seeded_store())
}
