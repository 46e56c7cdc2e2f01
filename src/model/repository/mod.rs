use chrono::NaiveDateTime;

/// represents a row in the notes table
#[derive(Debug, PartialEq, Clone)]
pub struct NoteRecord {
    /// the id, will only be populated when pulled from the database
    pub id: Option<u32>,
    pub title: String,
    pub author_name: String,
    pub branch: String,
    pub year: String,
    pub semester: String,
    pub subject: String,
    /// the name of the file in the upload directory, not the name the uploader sent
    pub filename: String,
    /// the browser instance that uploaded this note, if it sent one
    pub device_id: Option<String>,
    pub avg_rating: f64,
    pub total_ratings: u32,
    /// set by the database on insert, so this is `None` for records that haven't been saved yet
    pub upload_date: Option<NaiveDateTime>,
}

/// represents a row in the ratings table
#[derive(Debug, PartialEq, Clone)]
pub struct Rating {
    pub id: Option<u32>,
    pub note_id: u32,
    pub device_id: String,
    pub rating: u8,
    pub rated_at: Option<NaiveDateTime>,
}

/// represents a row in the blocked_devices table
#[derive(Debug, PartialEq, Clone)]
pub struct BlockedDevice {
    pub device_id: String,
    pub blocked_at: NaiveDateTime,
    pub reason: Option<String>,
}

/// a slimmed down note, only used to audit which device uploaded what
#[derive(Debug, PartialEq, Clone)]
pub struct NoteDevice {
    pub id: u32,
    pub title: String,
    pub device_id: Option<String>,
    pub upload_date: NaiveDateTime,
}

impl NoteRecord {
    /// creates a record for a note that hasn't been rated or saved yet
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        author_name: String,
        branch: String,
        year: String,
        semester: String,
        subject: String,
        filename: String,
        device_id: Option<String>,
    ) -> NoteRecord {
        NoteRecord {
            id: None,
            title,
            author_name,
            branch,
            year,
            semester,
            subject,
            filename,
            device_id,
            avg_rating: 0.0,
            total_ratings: 0,
            upload_date: None,
        }
    }
}
