use std::backtrace::Backtrace;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use rocket::tokio::fs::create_dir_all;

use crate::config::NOTES_SERVER_CONFIG;
use crate::model::api::NoteApi;
use crate::model::error::note_errors::{GetNoteError, SearchNotesError, UploadNoteError};
use crate::model::repository::NoteRecord;
use crate::model::request::{NoteMetadata, UploadNoteRequest};
use crate::repository::{self, note_repository};
use crate::service::device_service;

/// anything that isn't a letter, number, or `.` gets swapped out of uploaded file names
static UNSAFE_FILE_NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-zA-Z0-9.]").unwrap());

/// the directory uploaded notes are written to
#[cfg(not(test))]
pub fn upload_dir() -> String {
    NOTES_SERVER_CONFIG.uploads.directory.clone()
}

#[cfg(test)]
pub fn upload_dir() -> String {
    let thread_name = crate::test::current_thread_name();
    format!("./{thread_name}_uploads")
}

/// validates the upload, writes the pdf to the upload directory, and then records the note in the database.
///
/// The file is written before the database row, and is left on the disk if the insert fails
pub async fn save_note(request: &mut UploadNoteRequest<'_>) -> Result<(), UploadNoteError> {
    let device_id = clean_device_id(request.device_id.as_deref());
    let file = match request.pdf.as_mut() {
        Some(f) => f,
        None => return Err(UploadNoteError::MissingFile),
    };
    let metadata = extract_metadata(
        request.title.as_deref(),
        request.author_name.as_deref(),
        request.branch.as_deref(),
        request.year.as_deref(),
        request.semester.as_deref(),
        request.subject.as_deref(),
        device_id,
    )?;
    // rocket's `name()` strips the extension, and we need it to check for .pdf
    let original_name = file
        .raw_name()
        .map(|n| n.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .unwrap_or_default();
    check_file(
        &original_name,
        file.len(),
        NOTES_SERVER_CONFIG.uploads.max_file_size_bytes(),
    )?;
    if let Some(blocked) = device_service::check_device(metadata.device_id.as_deref()) {
        return Err(UploadNoteError::DeviceBlocked(blocked));
    }
    let file_name = generate_file_name(&original_name, chrono::Utc::now().timestamp_millis());
    let dir = upload_dir();
    if let Err(e) = create_dir_all(Path::new(&dir)).await {
        log::error!(
            "Failed to create upload directory {dir}: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(UploadNoteError::FailWriteDisk);
    }
    let path = Path::new(&dir).join(&file_name);
    if let Err(e) = file.move_copy_to(&path).await {
        log::error!(
            "Failed to write uploaded note to {path:?}: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(UploadNoteError::FailWriteDisk);
    }
    let record = NoteRecord::new(
        metadata.title,
        metadata.author_name,
        metadata.branch,
        metadata.year,
        metadata.semester,
        metadata.subject,
        file_name.clone(),
        metadata.device_id,
    );
    let insert_result =
        repository::open_connection().and_then(|con| note_repository::create_note(&record, &con));
    match insert_result {
        Ok(id) => {
            log::info!("Saved note {id} as {file_name}");
            Ok(())
        }
        Err(e) => {
            log::error!(
                "Failed to save note record for {file_name}, the file is left orphaned on disk: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UploadNoteError::FailWriteDb)
        }
    }
}

/// returns every note for the taxonomy leaf, newest first
pub fn search_notes(
    branch: &str,
    year: &str,
    semester: &str,
    subject: &str,
) -> Result<Vec<NoteApi>, SearchNotesError> {
    let notes = repository::open_connection()
        .and_then(|con| note_repository::search_notes(branch, year, semester, subject, &con));
    match notes {
        Ok(notes) => Ok(notes.into_iter().map(NoteApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to search notes for {branch}/{year}/{semester}/{subject}: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(SearchNotesError::DbError)
        }
    }
}

pub fn get_note(id: u32) -> Result<NoteRecord, GetNoteError> {
    let note = repository::open_connection().and_then(|con| note_repository::get_by_id(id, &con));
    match note {
        Ok(note) => Ok(note),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetNoteError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to retrieve note {id}: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetNoteError::DbError)
        }
    }
}

/// where the pdf for `note` lives on disk
pub fn note_file_path(note: &NoteRecord) -> PathBuf {
    Path::new(&upload_dir()).join(&note.filename)
}

/// makes sure every required field is present and non-blank. The values are kept as free text
pub fn extract_metadata(
    title: Option<&str>,
    author_name: Option<&str>,
    branch: Option<&str>,
    year: Option<&str>,
    semester: Option<&str>,
    subject: Option<&str>,
    device_id: Option<String>,
) -> Result<NoteMetadata, UploadNoteError> {
    fn required(value: Option<&str>) -> Result<String, UploadNoteError> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(UploadNoteError::MissingFields),
        }
    }
    let title = required(title)?;
    let author_name = required(author_name)?;
    let branch = required(branch)?;
    let year = required(year)?;
    let semester = required(semester)?;
    let subject = required(subject)?;
    Ok(NoteMetadata {
        title,
        author_name,
        branch,
        year,
        semester,
        subject,
        device_id,
    })
}

/// rejects files over `max_size` bytes and files whose name doesn't end in .pdf
pub fn check_file(file_name: &str, size: u64, max_size: u64) -> Result<(), UploadNoteError> {
    if size > max_size {
        return Err(UploadNoteError::FileTooLarge);
    }
    if !file_name.to_lowercase().ends_with(".pdf") {
        return Err(UploadNoteError::NotAPdf);
    }
    Ok(())
}

/// `<millis>-<original name>`, with every character that isn't alphanumeric or `.` replaced by `_`
pub fn generate_file_name(original_name: &str, millis: i64) -> String {
    let sanitized = UNSAFE_FILE_NAME_CHARS.replace_all(original_name, "_");
    format!("{millis}-{sanitized}")
}

/// blank device ids are treated as if the client never sent one
pub fn clean_device_id(device_id: Option<&str>) -> Option<String> {
    device_id
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
