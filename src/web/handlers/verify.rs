// POST /verify — run a claim through the verification engine.
//
// Request: {"claim": "...", "user_email": "..."}  (user_email optional)
//
// Returns 400 when the body is missing, not a JSON object, or `{}`, and
// when the claim is blank.
// Returns 403 when a Free account has used up today's quota.
// Otherwise returns the VerificationResult JSON and charges one use to the
// account, if any.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{error, warn};

use crate::db::today;
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    claim: String,
    #[serde(default)]
    user_email: Option<String>,
}

/// A body counts as data only if it is a non-empty JSON object.
fn parse_request(body: &[u8]) -> Option<VerifyRequest> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match &value {
        serde_json::Value::Object(fields) if !fields.is_empty() => {
            serde_json::from_value(value).ok()
        }
        _ => None,
    }
}

pub async fn verify(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Some(request) => request,
        None => return api_error(StatusCode::BAD_REQUEST, "No data provided"),
    };

    let claim = request.claim.trim();
    if claim.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "No claim provided");
    }

    let email = request.user_email.as_deref().filter(|e| !e.is_empty());

    if let Some(email) = email {
        match state.db.refresh_user(email, &today()).await {
            Ok(Some(user)) if user.quota_exhausted() => {
                return api_error(
                    StatusCode::FORBIDDEN,
                    "Daily usage limit reached. Please upgrade to premium.",
                );
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "DB error checking usage");
                return api_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &format!("Server error: {e}"),
                );
            }
        }
    }

    let result = state.engine.verify(claim).await;

    if let Some(email) = email {
        if let Err(e) = state.db.consume_usage(email).await {
            warn!(error = %e, "Failed to record usage");
        }
    }

    Json(result).into_response()
}
