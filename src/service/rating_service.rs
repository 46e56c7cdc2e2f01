use std::backtrace::Backtrace;

use crate::model::error::rating_errors::RateNoteError;
use crate::model::request::RateNoteRequest;
use crate::repository::{self, is_unique_violation, note_repository, rating_repository};
use crate::service::device_service;

/// records `device_id`'s rating on the note and recalculates the note's average and count.
///
/// A device can only rate a note once. The lookup for an existing rating is only a shortcut;
/// the unique constraint on the ratings table is what actually stops duplicate votes
pub fn rate_note(note_id: u32, request: RateNoteRequest) -> Result<(), RateNoteError> {
    let device_id = match request.device_id.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => return Err(RateNoteError::InvalidRating),
    };
    let rating = match request.rating {
        Some(r) if (1..=5).contains(&r) => r as u8,
        _ => return Err(RateNoteError::InvalidRating),
    };
    if let Some(blocked) = device_service::check_device(Some(&device_id)) {
        return Err(RateNoteError::DeviceBlocked(blocked));
    }
    let mut con = repository::open_connection().map_err(|e| log_db_error(note_id, e))?;
    match note_repository::get_by_id(note_id, &con) {
        Ok(_) => {}
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(RateNoteError::NoteNotFound),
        Err(e) => return Err(log_db_error(note_id, e)),
    };
    match rating_repository::get_rating(note_id, &device_id, &con) {
        Ok(Some(_)) => return Err(RateNoteError::AlreadyRated),
        Ok(None) => {}
        Err(e) => return Err(log_db_error(note_id, e)),
    };
    let tx = con.transaction().map_err(|e| log_db_error(note_id, e))?;
    match rating_repository::create_rating(note_id, &device_id, rating, &tx) {
        Ok(_) => {}
        // another request from the same device got in between the check and the insert
        Err(e) if is_unique_violation(&e) => return Err(RateNoteError::AlreadyRated),
        Err(e) => return Err(log_db_error(note_id, e)),
    };
    note_repository::update_note_rating(note_id, &tx).map_err(|e| log_db_error(note_id, e))?;
    tx.commit().map_err(|e| log_db_error(note_id, e))?;
    log::debug!("device {device_id} rated note {note_id} a {rating}");
    Ok(())
}

fn log_db_error(note_id: u32, e: rusqlite::Error) -> RateNoteError {
    log::error!(
        "Failed to rate note {note_id}: {e:?}\n{}",
        Backtrace::force_capture()
    );
    RateNoteError::DbError
}
