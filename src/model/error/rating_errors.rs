use crate::model::repository::BlockedDevice;

#[derive(PartialEq, Debug)]
pub enum RateNoteError {
    /// device id missing, rating missing, or rating outside of 1-5
    InvalidRating,
    /// the device already has a rating on this note
    AlreadyRated,
    NoteNotFound,
    DeviceBlocked(BlockedDevice),
    DbError,
}
