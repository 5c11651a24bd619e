// Copyright 2023 Remi Bernotavicius

use diesel::connection::SimpleConnection as _;
use diesel::prelude::Connection as _;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::error::Error;
use std::path::Path;

pub mod models;
pub mod query;
pub mod schema;

pub type Connection = diesel::sqlite::SqliteConnection;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// SQLite leaves foreign-key enforcement off unless the pragma is set on
/// every connection.
pub fn establish_connection(
    path: impl AsRef<Path>,
) -> Result<Connection, Box<dyn Error + Send + Sync + 'static>> {
    let mut connection = Connection::establish(path.as_ref().to_str().unwrap())?;
    connection.batch_execute("PRAGMA foreign_keys = 1")?;
    connection.run_pending_migrations(MIGRATIONS)?;
    Ok(connection)
}

#[test]
fn migrations() {
    use std::{env, fs};

    let database_path = env::temp_dir().join("meal-planner-db-migration-test.sqlite");
    if database_path.exists() {
        fs::remove_file(&database_path).unwrap();
    }

    // The second run must find everything already applied.
    for _ in 0..2 {
        establish_connection(&database_path).unwrap();
    }

    fs::remove_file(&database_path).unwrap();
}

#[test]
fn create_tables_idempotent() {
    let mut conn = establish_connection(":memory:").unwrap();

    // IF NOT EXISTS makes re-running the raw DDL a no-op.
    conn.batch_execute(include_str!(
        "../../migrations/2024-11-02-181503_create_planner_tables/up.sql"
    ))
    .unwrap();
}
