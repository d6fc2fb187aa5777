//! Test database setup and management
#![allow(dead_code)]

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::env;

/// Resolve the test database URL.
/// Defaults to a per-process SQLite file so tests need no external services.
fn test_database_url() -> String {
    env::var("TEST_DATABASE_URL").unwrap_or_else(|_| {
        let path = env::temp_dir().join(format!("pollbox_test_{}.db", std::process::id()));
        format!("sqlite://{}?mode=rwc", path.display())
    })
}

/// Initialize the global pool used by the request handlers.
/// Must be called from an async context.
async fn init_global_pool() {
    // We can't use Once::call_once here because init is async.
    use std::sync::atomic::{AtomicBool, Ordering};
    static DB_INITIALIZED: AtomicBool = AtomicBool::new(false);

    if !DB_INITIALIZED.swap(true, Ordering::SeqCst) {
        pollbox::db::init_db(test_database_url()).await;
    }
}

/// Setup test database - initialize the global pool, apply the schema,
/// and return a connection for fixtures and assertions.
pub async fn setup_test_database() -> Result<DatabaseConnection, DbErr> {
    init_global_pool().await;

    let db = Database::connect(&test_database_url()).await?;
    create_schema(&db).await?;

    Ok(db)
}

/// Schema for the SQLite test database. Production runs the equivalent
/// DDL against Postgres.
async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question_text TEXT NOT NULL,
            pub_date TEXT NOT NULL
        );",
        "CREATE TABLE IF NOT EXISTS choices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question_id INTEGER NOT NULL REFERENCES questions(id) ON DELETE CASCADE,
            choice_text TEXT NOT NULL,
            votes INTEGER NOT NULL DEFAULT 0
        );",
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

/// Cleanup function to remove test data.
/// Child tables must be cleared before their parents.
pub async fn cleanup_test_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    for table in ["choices", "questions"] {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!("DELETE FROM {};", table),
        ))
        .await?;
    }

    Ok(())
}
