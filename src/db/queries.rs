// Database queries — CRUD operations for user accounts and usage metering.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.
// Dates are passed in as YYYY-MM-DD strings so callers (and tests) control
// what "today" means.

use anyhow::Result;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use super::models::{hash_password, Subscription, User, DAILY_FREE_QUOTA};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, subscription, usage_count, created_at, last_reset";

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let subscription: String = row.get(4)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        subscription: Subscription::from_db(&subscription),
        usage_count: row.get(5)?,
        created_at: row.get(6)?,
        last_reset: row.get(7)?,
    })
}

/// Register a new account. Returns false if the email is already taken.
pub fn create_user(conn: &Connection, name: &str, email: &str, password: &str) -> Result<bool> {
    let result = conn.execute(
        "INSERT INTO users (name, email, password_hash) VALUES (?1, ?2, ?3)",
        params![name, email, hash_password(password)],
    );

    match result {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Look up an account by email.
pub fn get_user(conn: &Connection, email: &str) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1");
    let user = conn
        .query_row(&sql, params![email], row_to_user)
        .optional()?;
    Ok(user)
}

/// Change an account's subscription tier.
pub fn update_subscription(
    conn: &Connection,
    email: &str,
    subscription: Subscription,
) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE users SET subscription = ?1 WHERE email = ?2",
        params![subscription.as_str(), email],
    )?;
    Ok(changed > 0)
}

/// Overwrite an account's remaining verifications. Returns false for unknown emails.
pub fn set_usage(conn: &Connection, email: &str, usage_count: i64) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE users SET usage_count = ?1 WHERE email = ?2",
        params![usage_count, email],
    )?;
    Ok(changed > 0)
}

/// Spend one verification from a Free account, never going below zero.
/// Premium accounts are untouched.
pub fn consume_usage(conn: &Connection, email: &str) -> Result<()> {
    conn.execute(
        "UPDATE users SET usage_count = MAX(0, usage_count - 1)
         WHERE email = ?1 AND subscription = 'Free'",
        params![email],
    )?;
    Ok(())
}

/// Restore the daily quota for every Free account last reset before `today`.
/// Returns how many accounts were reset.
pub fn reset_daily_usage(conn: &Connection, today: &str) -> Result<usize> {
    let changed = conn.execute(
        "UPDATE users SET usage_count = ?1, last_reset = ?2
         WHERE subscription = 'Free' AND last_reset < ?2",
        params![DAILY_FREE_QUOTA, today],
    )?;
    Ok(changed)
}

/// Load an account, first restoring its daily quota if it's a Free account
/// that hasn't been reset `today`.
pub fn refresh_user(conn: &Connection, email: &str, today: &str) -> Result<Option<User>> {
    conn.execute(
        "UPDATE users SET usage_count = ?1, last_reset = ?2
         WHERE email = ?3 AND subscription = 'Free' AND last_reset != ?2",
        params![DAILY_FREE_QUOTA, today, email],
    )?;
    get_user(conn, email)
}
