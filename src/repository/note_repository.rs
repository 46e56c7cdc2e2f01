use rusqlite::Connection;

use crate::model::repository::{NoteDevice, NoteRecord};

/// saves the note and returns its new id. Rating fields are left to the table defaults
pub fn create_note(note: &NoteRecord, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/create_note.sql"))?;
    let id = pst.insert(rusqlite::params![
        note.title,
        note.author_name,
        note.branch,
        note.year,
        note.semester,
        note.subject,
        note.filename,
        note.device_id,
    ])?;
    Ok(id as u32)
}

/// retrieves the note with the passed id. Fails with [`rusqlite::Error::QueryReturnedNoRows`] if there isn't one
pub fn get_by_id(id: u32, con: &Connection) -> Result<NoteRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/get_note_by_id.sql"))?;
    pst.query_row([id], note_mapper)
}

/// returns every note filed under the exact branch / year / semester / subject, newest first
pub fn search_notes(
    branch: &str,
    year: &str,
    semester: &str,
    subject: &str,
    con: &Connection,
) -> Result<Vec<NoteRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/search_notes.sql"))?;
    let rows = pst.query_map(rusqlite::params![branch, year, semester, subject], note_mapper)?;
    rows.collect::<Result<Vec<NoteRecord>, rusqlite::Error>>()
}

/// lists every note with the device that uploaded it, newest first
pub fn get_note_devices(con: &Connection) -> Result<Vec<NoteDevice>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/notes/get_note_devices.sql"))?;
    let rows = pst.query_map([], |row| {
        Ok(NoteDevice {
            id: row.get(0)?,
            title: row.get(1)?,
            device_id: row.get(2)?,
            upload_date: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<NoteDevice>, rusqlite::Error>>()
}

/// recalculates the average and count for the note from every rating on it
pub fn update_note_rating(note_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notes/update_note_rating.sql"
    ))?;
    pst.execute([note_id])?;
    Ok(())
}

fn note_mapper(row: &rusqlite::Row) -> Result<NoteRecord, rusqlite::Error> {
    Ok(NoteRecord {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        author_name: row.get(2)?,
        branch: row.get(3)?,
        year: row.get(4)?,
        semester: row.get(5)?,
        subject: row.get(6)?,
        filename: row.get(7)?,
        device_id: row.get(8)?,
        avg_rating: row.get::<_, Option<f64>>(9)?.unwrap_or_default(),
        total_ratings: row.get::<_, Option<u32>>(10)?.unwrap_or_default(),
        upload_date: row.get(11)?,
    })
}
