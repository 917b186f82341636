// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{Subscription, User};
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn create_user(&self, name: &str, email: &str, password: &str) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::create_user(&conn, name, email, password)
    }

    async fn get_user(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn.lock().await;
        super::queries::get_user(&conn, email)
    }

    async fn update_subscription(&self, email: &str, subscription: Subscription) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::update_subscription(&conn, email, subscription)
    }

    async fn set_usage(&self, email: &str, usage_count: i64) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::set_usage(&conn, email, usage_count)
    }

    async fn consume_usage(&self, email: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::consume_usage(&conn, email)
    }

    async fn reset_daily_usage(&self, today: &str) -> Result<usize> {
        let conn = self.conn.lock().await;
        super::queries::reset_daily_usage(&conn, today)
    }

    async fn refresh_user(&self, email: &str, today: &str) -> Result<Option<User>> {
        let conn = self.conn.lock().await;
        super::queries::refresh_user(&conn, email, today)
    }
}
