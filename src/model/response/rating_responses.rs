use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, BlockedDeviceMessage, ErrorMessage};

#[derive(Responder)]
pub enum RateNoteResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<BasicMessage>),
    /// also used when the device already rated the note
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BlockedDeviceMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}
