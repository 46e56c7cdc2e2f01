use chrono::NaiveDateTime;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::{BlockedDevice, NoteDevice, NoteRecord};

/// a note as the browse endpoint returns it. The uploader's device id is deliberately left off,
/// see `/api/dev/note-device` for that
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct NoteApi {
    pub id: u32,
    pub title: String,
    pub author_name: String,
    pub branch: String,
    pub year: String,
    pub semester: String,
    pub subject: String,
    pub filename: String,
    pub avg_rating: f64,
    pub total_ratings: u32,
    pub upload_date: Option<NaiveDateTime>,
    /// `avg_rating` rounded to 1 decimal place
    pub rating: f64,
    pub num_ratings: u32,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct NoteDeviceApi {
    pub device_id: Option<String>,
}

/// one row of the device audit list
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct DeviceIdApi {
    pub id: u32,
    pub title: String,
    pub device_id: Option<String>,
    pub upload_date: NaiveDateTime,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct BlockedDeviceApi {
    pub device_id: String,
    pub blocked_at: NaiveDateTime,
    pub reason: Option<String>,
}

/// rounds to 1 decimal place the same way sqlite's `round(x, 1)` does
pub fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl From<NoteRecord> for NoteApi {
    fn from(value: NoteRecord) -> Self {
        Self {
            // only records pulled from the database are converted, so the id is always there
            id: value.id.unwrap_or_default(),
            title: value.title,
            author_name: value.author_name,
            branch: value.branch,
            year: value.year,
            semester: value.semester,
            subject: value.subject,
            filename: value.filename,
            avg_rating: value.avg_rating,
            total_ratings: value.total_ratings,
            upload_date: value.upload_date,
            rating: round_rating(value.avg_rating),
            num_ratings: value.total_ratings,
        }
    }
}

impl From<NoteDevice> for DeviceIdApi {
    fn from(value: NoteDevice) -> Self {
        Self {
            id: value.id,
            title: value.title,
            device_id: value.device_id,
            upload_date: value.upload_date,
        }
    }
}

impl From<BlockedDevice> for BlockedDeviceApi {
    fn from(value: BlockedDevice) -> Self {
        Self {
            device_id: value.device_id,
            blocked_at: value.blocked_at,
            reason: value.reason,
        }
    }
}
