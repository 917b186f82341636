// Data models — Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Verifications a Free account gets per day.
pub const DAILY_FREE_QUOTA: i64 = 5;

/// Subscription tier. Only Free accounts are metered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subscription {
    Free,
    Premium,
}

impl Subscription {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subscription::Free => "Free",
            Subscription::Premium => "Premium",
        }
    }

    /// Parse a stored tier. Anything unrecognised is treated as Free.
    pub fn from_db(value: &str) -> Self {
        match value {
            "Premium" => Subscription::Premium,
            _ => Subscription::Free,
        }
    }
}

impl std::fmt::Display for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub subscription: Subscription,
    /// Verifications left today (Free accounts only)
    pub usage_count: i64,
    pub created_at: String,
    /// Date of the last quota reset, YYYY-MM-DD
    pub last_reset: String,
}

impl User {
    pub fn password_matches(&self, password: &str) -> bool {
        self.password_hash == hash_password(password)
    }

    /// Free accounts with no verifications left today.
    pub fn quota_exhausted(&self) -> bool {
        self.subscription == Subscription::Free && self.usage_count <= 0
    }
}

/// Lowercase hex SHA-256 of the password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
