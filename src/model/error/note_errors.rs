use crate::model::repository::BlockedDevice;

#[derive(PartialEq, Debug)]
pub enum UploadNoteError {
    /// no file was attached under the `pdf` field
    MissingFile,
    /// one of the required text fields was missing or blank
    MissingFields,
    /// the file is bigger than the configured limit
    FileTooLarge,
    /// the file name doesn't end in .pdf
    NotAPdf,
    /// the uploading device is on the block list
    DeviceBlocked(BlockedDevice),
    FailWriteDisk,
    FailWriteDb,
}

#[derive(PartialEq, Debug)]
pub enum GetNoteError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum SearchNotesError {
    DbError,
}
