//! Global database connection pool.

use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};

static DB_POOL: OnceCell<DatabaseConnection> = OnceCell::new();

/// Connect to the database and install the pool for `get_db_pool`.
/// Panics if the connection cannot be established.
pub async fn init_db(database_url: String) {
    let pool = Database::connect(&database_url)
        .await
        .expect("Failed to connect to the database.");

    if DB_POOL.set(pool).is_err() {
        log::warn!("init_db() called more than once; keeping the existing pool.");
    }
}

pub fn get_db_pool() -> &'static DatabaseConnection {
    DB_POOL
        .get()
        .expect("Database pool was requested before init_db().")
}
