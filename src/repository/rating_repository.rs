use rusqlite::{Connection, OptionalExtension};

use crate::model::repository::Rating;

/// returns the rating `device_id` left on the note, if there is one
pub fn get_rating(
    note_id: u32,
    device_id: &str,
    con: &Connection,
) -> Result<Option<Rating>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/ratings/get_rating.sql"))?;
    pst.query_row(rusqlite::params![note_id, device_id], rating_mapper)
        .optional()
}

/// saves a new rating. The unique constraint on (note_id, device_id) makes this fail if the device already rated the note
pub fn create_rating(
    note_id: u32,
    device_id: &str,
    rating: u8,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/ratings/create_rating.sql"))?;
    let id = pst.insert(rusqlite::params![note_id, device_id, rating])?;
    Ok(id as u32)
}

fn rating_mapper(row: &rusqlite::Row) -> Result<Rating, rusqlite::Error> {
    Ok(Rating {
        id: Some(row.get(0)?),
        note_id: row.get(1)?,
        device_id: row.get(2)?,
        rating: row.get(3)?,
        rated_at: row.get(4)?,
    })
}
