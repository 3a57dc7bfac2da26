use rusqlite::{Connection, OptionalExtension, Result};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub username: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub saved_at: u64,
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Replaces whatever credentials were stored before.
pub fn save_credentials(
    conn: &Connection,
    username: &str,
    access_token: &str,
    refresh_token: Option<&str>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO credentials (id, username, access_token, refresh_token, saved_at)
         VALUES (1, ?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
             username = excluded.username,
             access_token = excluded.access_token,
             refresh_token = excluded.refresh_token,
             saved_at = excluded.saved_at",
        rusqlite::params![username, access_token, refresh_token, now()],
    )?;
    Ok(())
}

pub fn load_credentials(conn: &Connection) -> Result<Option<StoredCredentials>> {
    conn.query_row(
        "SELECT username, access_token, refresh_token, saved_at FROM credentials WHERE id = 1",
        [],
        |row| {
            Ok(StoredCredentials {
                username: row.get(0)?,
                access_token: row.get(1)?,
                refresh_token: row.get(2)?,
                saved_at: row.get(3)?,
            })
        },
    )
    .optional()
}

pub fn clear_credentials(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM credentials", [])?;
    Ok(())
}
