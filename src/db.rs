// ==========================================
// Invoicing Platform - SQLite Connection Init
// ==========================================
// Goals:
// - one place for Connection::open PRAGMA behavior, so every module
//   gets foreign keys and the same busy_timeout
// - schema bootstrap for the import target tables
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified per-connection PRAGMAs.
///
/// foreign_keys and busy_timeout are per-connection settings and must
/// be applied on every open.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration.
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create the import target tables when they do not exist yet.
///
/// The unique index on (organization_id, email) models the storage
/// constraint the field validators do not: a duplicate email inside a
/// batch fails the whole commit.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS customer (
            id                   TEXT PRIMARY KEY,
            organization_id      TEXT NOT NULL,
            name                 TEXT NOT NULL,
            email                TEXT,
            phone                TEXT,
            address              TEXT,
            tax_exempt           INTEGER NOT NULL DEFAULT 0,
            tax_exemption_reason TEXT,
            tax_id               TEXT,
            created_at           TEXT NOT NULL,
            updated_at           TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_customer_org_email
            ON customer(organization_id, email);

        CREATE TABLE IF NOT EXISTS product (
            id              TEXT PRIMARY KEY,
            organization_id TEXT NOT NULL,
            name            TEXT NOT NULL,
            description     TEXT,
            price           REAL NOT NULL,
            tax_rate        REAL NOT NULL DEFAULT 0,
            unit            TEXT NOT NULL DEFAULT 'piece',
            image_url       TEXT,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL
        );
        "#,
    )
}
