//! Embedded PostgreSQL helpers for repository integration tests.
//!
//! Each test gets its own temporary database on a shared cluster, migrated
//! with the same Diesel migrations operators apply by hand.

use diesel::Connection;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TemporaryDatabase;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true", or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip with a marker when allowed, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Create a fresh database on the shared cluster and run the migrations.
///
/// Must be called outside any Tokio runtime.
pub fn provision_database() -> Result<TemporaryDatabase, String> {
    let cluster =
        pg_embedded_setup_unpriv::test_support::shared_cluster_handle().map_err(|e| e.to_string())?;
    let database = cluster
        .temporary_database(format!("users_{}", uuid::Uuid::new_v4().simple()))
        .map_err(|err| format!("create database: {err}"))?;
    migrate_schema(database.url().to_string().as_str())?;
    Ok(database)
}

fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err}"))?;
    Ok(())
}

/// Drop `table` to simulate a store whose schema has gone away.
pub fn drop_table(url: &str, table: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    let escaped = table.replace('"', "\"\"");
    conn.batch_execute(&format!(r#"DROP TABLE IF EXISTS "{escaped}""#))
        .map_err(|err| format!("drop table: {err}"))
}
