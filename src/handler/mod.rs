pub mod admin_handler;
pub mod catchers;
pub mod note_handler;
pub mod rating_handler;
