//! One-shot content duplication for newly configured site locales.
//!
//! A locale counts as populated once it has a profile. For every configured
//! locale without one, all locale-partitioned rows are cloned from a source
//! locale. Running the job again is a no-op.

use tracing::{info, warn};

use crate::locales::SiteLocales;
use crate::repository::{CloneReport, PortfolioRepository, RepositoryError};

/// Outcome per target locale that needed content.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSync {
    pub target: String,
    pub source: String,
    pub report: CloneReport,
}

/// Populates every configured locale that has no profile yet.
///
/// Source: `canonical_locale` when it has content, else the first populated
/// locale in alphabetical order. With no populated locale nothing is cloned.
pub async fn sync_site_locales(
    repo: &dyn PortfolioRepository,
    site_locales: &SiteLocales,
    canonical_locale: &str,
) -> Result<Vec<LocaleSync>, RepositoryError> {
    let populated = repo.content_locales().await?;

    let missing: Vec<&String> = site_locales
        .codes()
        .iter()
        .filter(|code| !populated.contains(*code))
        .collect();
    if missing.is_empty() {
        return Ok(vec![]);
    }

    let source = if populated.iter().any(|l| l == canonical_locale) {
        canonical_locale.to_string()
    } else if let Some(first) = populated.first() {
        first.clone()
    } else {
        warn!("No populated locale to clone from; skipping locale sync");
        return Ok(vec![]);
    };

    let mut results = Vec::with_capacity(missing.len());
    for target in missing {
        info!("Duplicating content from '{source}' to new locale '{target}'");
        let report = repo.clone_locale(&source, target).await?;
        results.push(LocaleSync {
            target: target.clone(),
            source: source.clone(),
            report,
        });
    }
    Ok(results)
}
