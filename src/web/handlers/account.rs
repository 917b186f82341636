// Account handlers — login, registration, subscription, usage.
//
// These keep the original dashboard's response shape: HTTP 200 with
// {"success": bool, ...}, validation failures reported in "message".

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::db::today;
use crate::web::{account_failure, AppState};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// POST /login — check credentials and return the account summary.
/// A Free account's daily quota is restored here on the first login of the day.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let email = body.email.trim();
    if email.is_empty() || body.password.is_empty() {
        return account_failure("Email and password required");
    }

    let user = match state.db.get_user(email).await {
        Ok(Some(user)) if user.password_matches(&body.password) => user,
        Ok(_) => return account_failure("Invalid email or password"),
        Err(e) => {
            error!(error = %e, "DB error during login");
            return account_failure("Server error");
        }
    };

    let user = match state.db.refresh_user(&user.email, &today()).await {
        Ok(Some(refreshed)) => refreshed,
        Ok(None) => user,
        Err(e) => {
            error!(error = %e, "DB error refreshing usage");
            return account_failure("Server error");
        }
    };

    Json(serde_json::json!({
        "success": true,
        "user": {
            "email": user.email,
            "name": user.name,
            "subscription": user.subscription,
            "usage_count": user.usage_count,
        }
    }))
    .into_response()
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// POST /register — create a Free account.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Response {
    let name = body.name.trim();
    let email = body.email.trim();
    if name.is_empty() || email.is_empty() || body.password.is_empty() {
        return account_failure("All fields are required");
    }

    if body.password.chars().count() < MIN_PASSWORD_LEN {
        return account_failure("Password must be at least 6 characters");
    }

    match state.db.create_user(name, email, &body.password).await {
        Ok(true) => Json(serde_json::json!({
            "success": true,
            "message": "User created successfully",
        }))
        .into_response(),
        Ok(false) => account_failure("Email already exists"),
        Err(e) => {
            error!(error = %e, "DB error during registration");
            account_failure("Server error")
        }
    }
}

#[derive(Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    email: Option<String>,
}

/// POST /subscribe — payments aren't wired up, so this never upgrades.
pub async fn subscribe(Json(body): Json<SubscribeRequest>) -> Response {
    if body.email.as_deref().map_or(true, str::is_empty) {
        return account_failure("Email required");
    }
    account_failure("Payment processing is not available in this demo version")
}

#[derive(Deserialize)]
pub struct UpdateUsageRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    usage_count: Option<i64>,
}

/// POST /update_usage — overwrite an account's remaining verifications.
pub async fn update_usage(
    State(state): State<AppState>,
    Json(body): Json<UpdateUsageRequest>,
) -> Response {
    let (Some(email), Some(usage_count)) = (body.email.as_deref(), body.usage_count) else {
        return account_failure("Email and usage_count required");
    };
    if email.is_empty() {
        return account_failure("Email and usage_count required");
    }

    match state.db.set_usage(email, usage_count).await {
        Ok(_) => Json(serde_json::json!({
            "success": true,
            "message": "Usage updated",
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "DB error updating usage");
            account_failure("Server error")
        }
    }
}
