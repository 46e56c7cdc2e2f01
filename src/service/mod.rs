pub mod device_service;
pub mod note_service;
pub mod rating_service;
