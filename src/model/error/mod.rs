pub mod device_errors;
pub mod note_errors;
pub mod rating_errors;
