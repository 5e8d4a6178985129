//! Years-of-experience estimate from free-text experience date labels.
//!
//! Labels look like "Aug 2024", "Авг 2024", "Present" or "Настоящее время".
//! Parsing never fails: anything unreadable degrades to "now" or to January of
//! a year found somewhere in the label, so the estimate is always a `"N+"` string.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::models::content::ExperienceRow;
use crate::models::site::{MonthName, PresentMarker};
use crate::repository::{PortfolioRepository, RepositoryError};

/// Built-in English month names, consulted after the configured tables.
const ENGLISH_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1 – 12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whole months from `self` to `end`; negative when `end` is earlier.
    pub fn months_until(self, end: YearMonth) -> i64 {
        (end.year as i64 - self.year as i64) * 12 + (end.month as i64 - self.month as i64)
    }
}

/// Month-name and present-marker tables of every configured locale.
#[derive(Debug, Clone, Default)]
pub struct DateVocabulary {
    /// Lowercased, sorted so the preferred locale is tried first and, within a
    /// locale, longer names win over their own prefixes.
    months: Vec<(String, u32)>,
    present: Vec<String>,
}

impl DateVocabulary {
    /// `preferred_locale` only changes lookup priority; every locale's table is
    /// still consulted.
    pub fn new(
        month_names: Vec<MonthName>,
        present_markers: Vec<PresentMarker>,
        preferred_locale: &str,
    ) -> Self {
        let mut entries: Vec<(bool, String, String, u32)> = month_names
            .into_iter()
            .filter_map(|m| {
                let text = m.text.trim().to_lowercase();
                if text.is_empty() {
                    return None;
                }
                Some((m.locale != preferred_locale, m.locale, text, m.month))
            })
            .collect();
        entries.sort_by(|a, b| {
            (a.0, &a.1, Reverse(a.2.chars().count()))
                .cmp(&(b.0, &b.1, Reverse(b.2.chars().count())))
        });

        let present = present_markers
            .into_iter()
            .map(|p| p.text.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            months: entries
                .into_iter()
                .map(|(_, _, text, month)| (text, month))
                .collect(),
            present,
        }
    }

    pub fn is_present(&self, label: &str) -> bool {
        let label = label.trim().to_lowercase();
        self.present.iter().any(|p| *p == label)
    }

    /// Resolves a month token by case-insensitive prefix against every locale's
    /// full and short names, then against built-in English names.
    pub fn month_of(&self, token: &str) -> Option<u32> {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }
        if let Some((_, month)) = self.months.iter().find(|(name, _)| token.starts_with(name)) {
            return Some(*month);
        }
        ENGLISH_MONTHS
            .iter()
            .position(|name| token.starts_with(&name[..3]))
            .map(|i| i as u32 + 1)
    }
}

/// Parses one experience date label. Total: never fails.
pub fn parse_label(label: &str, vocab: &DateVocabulary, now: YearMonth) -> YearMonth {
    let trimmed = label.trim();
    if trimmed.is_empty() || vocab.is_present(trimmed) {
        return now;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if let Some((last, earlier)) = tokens.split_last() {
        if is_digit_run(last) {
            if let Ok(year) = last.parse::<i32>() {
                let month = earlier
                    .iter()
                    .find_map(|t| vocab.month_of(t))
                    .unwrap_or(1);
                return YearMonth::new(year, month);
            }
        }
    }

    match scan_year(trimmed) {
        Some(year) => YearMonth::new(year, 1),
        None => now,
    }
}

fn is_digit_run(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Picks a year out of arbitrary text: the first four-digit run, otherwise the
/// longest digit run.
fn scan_year(text: &str) -> Option<i32> {
    let mut runs: Vec<&str> = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        match (c.is_ascii_digit(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(&text[s..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(&text[s..]);
    }

    let pick = runs.iter().find(|r| r.len() == 4).or_else(|| {
        runs.iter()
            .enumerate()
            .max_by_key(|(i, r)| (r.len(), Reverse(*i)))
            .map(|(_, r)| r)
    })?;
    pick.parse().ok()
}

/// Experience rows unique by `(company, start_label, end_label)`, exact string
/// match, first occurrence kept.
pub fn unique_periods(rows: &[ExperienceRow]) -> Vec<&ExperienceRow> {
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut unique = Vec::new();
    for row in rows {
        let key = (
            row.company.as_str(),
            row.start_label.as_str(),
            row.end_label.as_str(),
        );
        if seen.insert(key) {
            unique.push(row);
        }
    }
    unique
}

/// Sum of positive month spans over unique periods. Zero or negative spans
/// (malformed labels) are dropped.
pub fn total_months(rows: &[ExperienceRow], vocab: &DateVocabulary, now: YearMonth) -> i64 {
    unique_periods(rows)
        .into_iter()
        .map(|r| {
            let start = parse_label(&r.start_label, vocab, now);
            let end = parse_label(&r.end_label, vocab, now);
            start.months_until(end)
        })
        .filter(|m| *m > 0)
        .sum()
}

/// `"N+"` years when at least one year, otherwise `"M+"` months, `"0+"` for none.
pub fn render_years(total_months: i64) -> String {
    let total = total_months.max(0);
    let years = total / 12;
    if years >= 1 {
        format!("{years}+")
    } else {
        format!("{total}+")
    }
}

/// Estimates years of experience from the canonical locale's rows only, so a
/// job duplicated across locales is counted once.
pub async fn estimate_years(
    repo: &dyn PortfolioRepository,
    canonical_locale: &str,
    now: YearMonth,
) -> Result<String, RepositoryError> {
    let rows = repo.experiences(canonical_locale).await?;
    let vocab = DateVocabulary::new(
        repo.month_names().await?,
        repo.present_markers().await?,
        canonical_locale,
    );
    Ok(render_years(total_months(&rows, &vocab, now)))
}
