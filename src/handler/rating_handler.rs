use rocket::serde::json::{self, Json};

use crate::guard::DeviceAccess;
use crate::model::error::rating_errors::RateNoteError;
use crate::model::request::RateNoteRequest;
use crate::model::response::rating_responses::RateNoteResponse;
use crate::model::response::{BasicMessage, BlockedDeviceMessage, ErrorMessage};
use crate::service::rating_service;

/// a body that isn't the expected shape (wrong types included) gets the same 400 as an out of range rating
#[post("/rate/<note_id>", data = "<request>")]
pub fn rate_note(
    note_id: u32,
    request: Result<Json<RateNoteRequest>, json::Error<'_>>,
    _device: DeviceAccess,
) -> RateNoteResponse {
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(e) => {
            log::debug!("Unreadable rating body for note {note_id}: {e:?}");
            return RateNoteResponse::BadRequest(ErrorMessage::new("Invalid rating or device ID"));
        }
    };
    match rating_service::rate_note(note_id, request) {
        Ok(()) => RateNoteResponse::Success(BasicMessage::new("Rating added successfully")),
        Err(RateNoteError::InvalidRating) => {
            RateNoteResponse::BadRequest(ErrorMessage::new("Invalid rating or device ID"))
        }
        Err(RateNoteError::AlreadyRated) => {
            RateNoteResponse::BadRequest(ErrorMessage::new("You have already rated this note"))
        }
        Err(RateNoteError::NoteNotFound) => {
            RateNoteResponse::NotFound(ErrorMessage::new("Note not found"))
        }
        Err(RateNoteError::DeviceBlocked(blocked)) => {
            RateNoteResponse::Forbidden(BlockedDeviceMessage::new(blocked))
        }
        Err(RateNoteError::DbError) => {
            RateNoteResponse::Failure(ErrorMessage::new("Error processing rating"))
        }
    }
}
