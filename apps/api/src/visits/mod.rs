//! Best-effort visit tracking for the public site.
//!
//! A visitor is keyed by the `sessionid` cookie, else the `X-Session-ID`
//! header, else a SHA-256 fingerprint of client IP and user agent.

use std::net::SocketAddr;

use axum::http::{header, HeaderMap};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::models::chat::MAX_SESSION_ID_CHARS;
use crate::models::site::NewVisit;
use crate::repository::PortfolioRepository;

pub const SESSION_HEADER: &str = "x-session-id";
pub const SESSION_COOKIE: &str = "sessionid";

const MAX_IP_ADDRESS: usize = 64;
const MAX_USER_AGENT: usize = 500;
const MAX_REFERER: usize = 500;
/// User agent prefix fed into the fingerprint.
const FINGERPRINT_UA_CHARS: usize = 100;

/// First `X-Forwarded-For` entry, else the peer address, else `"unknown"`.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    match (forwarded, peer) {
        (Some(ip), _) => ip.chars().take(MAX_IP_ADDRESS).collect(),
        (None, Some(addr)) => addr.ip().to_string(),
        (None, None) => "unknown".to_string(),
    }
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| fits_session_column(value))
}

fn fits_session_column(id: &str) -> bool {
    !id.is_empty() && id.chars().count() <= MAX_SESSION_ID_CHARS
}

pub fn fingerprint(ip: &str, user_agent: &str) -> String {
    let ua: String = user_agent.chars().take(FINGERPRINT_UA_CHARS).collect();
    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    hasher.update(ua.as_bytes());
    hex::encode(hasher.finalize())
}

/// Ids too long for the visits table are skipped as if absent.
pub fn session_key(headers: &HeaderMap, ip: &str, user_agent: &str) -> String {
    session_cookie(headers)
        .or_else(|| {
            headers
                .get(SESSION_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| fits_session_column(s))
                .map(str::to_string)
        })
        .unwrap_or_else(|| fingerprint(ip, user_agent))
}

fn header_text(headers: &HeaderMap, name: header::HeaderName, max_chars: usize) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.chars().take(max_chars).collect())
}

/// Builds the visit row for a request to `page`.
pub fn visit_from_request(headers: &HeaderMap, peer: Option<SocketAddr>, page: &str) -> NewVisit {
    let ip_address = client_ip(headers, peer);
    let user_agent =
        header_text(headers, header::USER_AGENT, MAX_USER_AGENT).unwrap_or_default();
    let session_id = session_key(headers, &ip_address, &user_agent);
    NewVisit {
        session_id,
        ip_address,
        user_agent,
        referer: header_text(headers, header::REFERER, MAX_REFERER).filter(|r| !r.is_empty()),
        page: page.to_string(),
    }
}

/// Records the visit. Never fails the caller.
pub async fn track_visit(repo: &dyn PortfolioRepository, visit: NewVisit) {
    let session_id = visit.session_id.clone();
    match repo.record_visit(visit).await {
        Ok(()) => debug!(session_id = %session_id, "Visit recorded"),
        Err(e) => warn!(session_id = %session_id, "Failed to track visit: {e}"),
    }
}
