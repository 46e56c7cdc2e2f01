#[derive(PartialEq, Debug)]
pub enum BlockDeviceError {
    /// neither a device id nor a note id was passed
    MissingTarget,
    NoteNotFound,
    /// the note was uploaded without a device id, so there's nothing to block
    NoteHasNoDevice,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UnblockDeviceError {
    MissingDeviceId,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum ListDevicesError {
    DbError,
}
