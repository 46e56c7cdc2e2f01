use rocket::form::Form;
use rocket::fs::NamedFile;
use rocket::serde::json::Json;

use crate::guard::DeviceAccess;
use crate::model::error::note_errors::{GetNoteError, SearchNotesError, UploadNoteError};
use crate::model::request::UploadNoteRequest;
use crate::model::response::note_responses::{
    DownloadNoteResponse, SearchNotesResponse, UploadNoteResponse,
};
use crate::model::response::{attachment, BasicMessage, BlockedDeviceMessage, ErrorMessage};
use crate::service::note_service;

/// lists every note uploaded for the subject, newest first
#[get("/notes/<branch>/<year>/<semester>/<subject>")]
pub fn search_notes(
    branch: &str,
    year: &str,
    semester: &str,
    subject: &str,
    _device: DeviceAccess,
) -> SearchNotesResponse {
    match note_service::search_notes(branch, year, semester, subject) {
        Ok(notes) => SearchNotesResponse::Success(Json::from(notes)),
        Err(SearchNotesError::DbError) => {
            SearchNotesResponse::GenericError(ErrorMessage::new("Server error"))
        }
    }
}

/// accepts a pdf and its details via multipart form and stores it off
#[post("/upload", data = "<request>")]
pub async fn upload_note(
    mut request: Form<UploadNoteRequest<'_>>,
    _device: DeviceAccess,
) -> UploadNoteResponse {
    match note_service::save_note(&mut request).await {
        Ok(()) => UploadNoteResponse::Success(BasicMessage::new("Note uploaded successfully")),
        Err(UploadNoteError::MissingFile) => {
            UploadNoteResponse::BadRequest(ErrorMessage::new("No file uploaded"))
        }
        Err(UploadNoteError::MissingFields) => UploadNoteResponse::BadRequest(ErrorMessage::new(
            "Missing required fields. Please provide all necessary information.",
        )),
        Err(UploadNoteError::FileTooLarge) => {
            UploadNoteResponse::BadRequest(ErrorMessage::new("File is larger than 50MB"))
        }
        Err(UploadNoteError::NotAPdf) => {
            UploadNoteResponse::BadRequest(ErrorMessage::new("Only PDF files can be uploaded"))
        }
        Err(UploadNoteError::DeviceBlocked(blocked)) => {
            UploadNoteResponse::Forbidden(BlockedDeviceMessage::new(blocked))
        }
        Err(UploadNoteError::FailWriteDisk) | Err(UploadNoteError::FailWriteDb) => {
            UploadNoteResponse::Failure(ErrorMessage::new("Error processing upload"))
        }
    }
}

/// sends the note's pdf back as an attachment
#[get("/download/<id>")]
pub async fn download_note(id: u32, _device: DeviceAccess) -> DownloadNoteResponse {
    let note = match note_service::get_note(id) {
        Ok(note) => note,
        Err(GetNoteError::NotFound) | Err(GetNoteError::DbError) => {
            return DownloadNoteResponse::NotFound(ErrorMessage::new("Note not found"))
        }
    };
    let path = note_service::note_file_path(&note);
    match NamedFile::open(&path).await {
        Ok(file) => DownloadNoteResponse::Success(file, attachment(&note.filename)),
        Err(e) => {
            log::error!("Note {id} exists but its file {path:?} could not be opened: {e:?}");
            DownloadNoteResponse::NotFound(ErrorMessage::new("Note not found"))
        }
    }
}
