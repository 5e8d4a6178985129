use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::site::{settings_object, translations_object};
use crate::state::AppState;
use crate::visits::{track_visit, visit_from_request};

/// Page recorded for visits first seen through the settings call.
const LANDING_PAGE: &str = "/";

/// GET /api/settings
///
/// The frontend's first call, so it also tracks the visit.
pub async fn handle_get_settings(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Result<Json<Map<String, Value>>, AppError> {
    let repo = state.repo.as_ref();
    let visit = visit_from_request(&headers, peer.map(|ConnectInfo(addr)| addr), LANDING_PAGE);
    track_visit(repo, visit).await;

    let rows = repo.public_settings().await?;
    Ok(Json(settings_object(rows)))
}

#[derive(Debug, Deserialize)]
pub struct TranslationsQuery {
    #[serde(alias = "locale")]
    pub lang: Option<String>,
}

/// GET /api/translations?lang=xx
pub async fn handle_get_translations(
    State(state): State<AppState>,
    Query(query): Query<TranslationsQuery>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let locale = query
        .lang
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| state.config.default_locale.clone());
    let rows = state.repo.translations(&locale).await?;
    Ok(Json(translations_object(rows)))
}
