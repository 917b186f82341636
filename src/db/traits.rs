// Database trait — async interface for account and usage operations.
//
// Implementor: SqliteDatabase (wraps rusqlite behind a tokio Mutex). The
// methods mirror the free functions in queries.rs so HTTP handlers can hold
// an `Arc<dyn Database>` without touching rusqlite directly.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Subscription, User};

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Accounts ---

    /// Register a new account. Returns false if the email is already taken.
    async fn create_user(&self, name: &str, email: &str, password: &str) -> Result<bool>;

    /// Look up an account by email.
    async fn get_user(&self, email: &str) -> Result<Option<User>>;

    /// Change an account's subscription tier.
    async fn update_subscription(&self, email: &str, subscription: Subscription) -> Result<bool>;

    // --- Usage metering ---

    /// Overwrite an account's remaining verifications.
    async fn set_usage(&self, email: &str, usage_count: i64) -> Result<bool>;

    /// Spend one verification from a Free account (floored at zero).
    async fn consume_usage(&self, email: &str) -> Result<()>;

    /// Restore the daily quota for all Free accounts last reset before `today`.
    async fn reset_daily_usage(&self, today: &str) -> Result<usize>;

    /// Load an account, restoring its daily quota first if `today` is a new day.
    async fn refresh_user(&self, email: &str, today: &str) -> Result<Option<User>>;
}
