use std::path::Path;

use rusqlite::{Connection, OpenFlags, Result};

pub mod blocked_device_repository;
pub mod note_repository;
pub mod rating_repository;

#[cfg(test)]
mod tests;

/// creates a new connection to the notes database with foreign keys enforced
#[cfg(not(test))]
pub fn open_connection() -> Result<Connection> {
    use crate::config::NOTES_SERVER_CONFIG;

    let con = Connection::open_with_flags(
        Path::new(NOTES_SERVER_CONFIG.database.location.as_str()),
        OpenFlags::default(),
    )?;
    con.pragma_update(None, "foreign_keys", "ON")?;
    Ok(con)
}

#[cfg(test)]
pub fn open_connection() -> Result<Connection> {
    let db_name = format!("{}.sqlite", crate::test::current_thread_name());
    let con = Connection::open_with_flags(Path::new(db_name.as_str()), OpenFlags::default())?;
    con.pragma_update(None, "foreign_keys", "ON")?;
    Ok(con)
}

/// creates any tables that don't exist yet. Safe to call on every startup
pub fn initialize_db() -> Result<()> {
    let con = open_connection()?;
    con.execute_batch(include_str!("../assets/init.sql"))?;
    con.close().map_err(|(_, e)| e)
}

/// true if `error` came from inserting a row that collides with a unique or primary key constraint
pub fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}
