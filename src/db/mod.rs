use rusqlite::{Connection, Result};
use std::path::Path;

pub mod credentials;

pub use credentials::{StoredCredentials, clear_credentials, load_credentials, save_credentials};

pub fn init_db(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let conn = Connection::open(db_path)?;

    run_migrations(&conn)?;

    Ok(conn)
}

pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    run_migrations(&conn)?;
    Ok(conn)
}

pub(crate) fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS credentials (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            username TEXT NOT NULL,
            access_token TEXT NOT NULL,
            refresh_token TEXT,
            saved_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}
