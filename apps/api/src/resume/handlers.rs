use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::locales::load_site_locales;
use crate::resume::aggregator::{aggregate, AggregateParams, ResumePayload};
use crate::resume::experience::YearMonth;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeQuery {
    #[serde(alias = "locale")]
    pub lang: Option<String>,
}

/// GET /api/resume?lang=xx
///
/// Unknown or missing `lang` falls back to the first configured site locale.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(query): Query<ResumeQuery>,
) -> Result<Json<ResumePayload>, AppError> {
    let repo = state.repo.as_ref();
    let site_locales = load_site_locales(repo, &state.config.default_locale).await;
    let locale = site_locales.resolve(query.lang.as_deref());

    let payload = aggregate(
        repo,
        AggregateParams {
            site_locales: &site_locales,
            locale,
            canonical_locale: &state.config.canonical_locale,
            now: YearMonth::from_date(Utc::now().date_naive()),
        },
    )
    .await?;

    Ok(Json(payload))
}
