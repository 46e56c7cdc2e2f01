use rocket::fs::TempFile;
use rocket::serde::{Deserialize, Serialize};
use rocket::FromForm;

/// the multipart form sent to `/api/upload`. Every field is optional here so that missing values
/// can be reported with our own messages instead of rocket's generic form errors
#[derive(FromForm)]
pub struct UploadNoteRequest<'a> {
    pub title: Option<String>,
    #[field(name = "authorName")]
    pub author_name: Option<String>,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
    pub subject: Option<String>,
    #[field(name = "deviceId")]
    pub device_id: Option<String>,
    /// the uploaded pdf
    pub pdf: Option<TempFile<'a>>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct RateNoteRequest {
    pub rating: Option<i64>,
    #[serde(rename = "deviceId")]
    pub device_id: Option<String>,
}

/// either `device_id` or `note_id` must be present. When `note_id` is passed, the device that uploaded that note is blocked
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct BlockDeviceRequest {
    #[serde(rename = "deviceId")]
    pub device_id: Option<String>,
    #[serde(rename = "noteId")]
    pub note_id: Option<u32>,
    pub reason: Option<String>,
}

/// the text fields of an upload once they've all been checked for presence
#[derive(Debug, PartialEq, Clone)]
pub struct NoteMetadata {
    pub title: String,
    pub author_name: String,
    pub branch: String,
    pub year: String,
    pub semester: String,
    pub subject: String,
    pub device_id: Option<String>,
}
