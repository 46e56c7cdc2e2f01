use rocket::fs::NamedFile;
use rocket::http::Header;
use rocket::serde::json::Json;

use crate::model::api::NoteApi;
use crate::model::response::{BasicMessage, BlockedDeviceMessage, ErrorMessage};

#[derive(Responder)]
pub enum UploadNoteResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BlockedDeviceMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum SearchNotesResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<Vec<NoteApi>>),
    #[response(status = 500, content_type = "json")]
    GenericError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum DownloadNoteResponse {
    #[response(status = 200)]
    Success(NamedFile, Header<'static>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
}
