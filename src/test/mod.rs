use std::fs::{remove_dir_all, remove_file};
use std::path::Path;

use rocket::http::{ContentType, Header};

use crate::model::repository::NoteRecord;
use crate::repository::{
    blocked_device_repository, initialize_db, note_repository, open_connection, rating_repository,
};
use crate::service::note_service::upload_dir;

mod note_handler_tests;

pub static ADMIN_USERNAME: &str = "developer";
pub static ADMIN_PASSWORD: &str = "test-password";
/// developer:test-password
pub static AUTH: &str = "Basic ZGV2ZWxvcGVyOnRlc3QtcGFzc3dvcmQ=";
/// developer:wrong
pub static BAD_AUTH: &str = "Basic ZGV2ZWxvcGVyOndyb25n";

static BOUNDARY: &str = "BOUNDARY";

pub fn auth_header() -> Header<'static> {
    Header::new("Authorization", AUTH)
}

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// removes any database left over from a previous run of the current test and creates a fresh one
pub fn init_db_folder() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    remove_dir_all(Path::new(upload_dir().as_str())).unwrap_or(());
    initialize_db().unwrap();
}

pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    remove_dir_all(Path::new(upload_dir().as_str())).unwrap_or(());
}

/// saves a note straight to the database, without a file on disk
pub fn create_note_db_entry(title: &str, subject: &str, device_id: Option<&str>) -> u32 {
    let con = open_connection().unwrap();
    let id = note_repository::create_note(
        &NoteRecord::new(
            title.to_string(),
            "Asha".to_string(),
            "CSE".to_string(),
            "2".to_string(),
            "SEM 3".to_string(),
            subject.to_string(),
            format!("{title}.pdf"),
            device_id.map(str::to_string),
        ),
        &con,
    )
    .unwrap();
    con.close().unwrap();
    id
}

pub fn create_rating_db_entry(note_id: u32, device_id: &str, rating: u8) {
    let con = open_connection().unwrap();
    rating_repository::create_rating(note_id, device_id, rating, &con).unwrap();
    note_repository::update_note_rating(note_id, &con).unwrap();
    con.close().unwrap();
}

pub fn block_device_db_entry(device_id: &str, reason: Option<&str>) {
    let con = open_connection().unwrap();
    blocked_device_repository::block_device(device_id, reason, &con).unwrap();
    con.close().unwrap();
}

pub fn get_note_db_entry(id: u32) -> NoteRecord {
    let con = open_connection().unwrap();
    let note = note_repository::get_by_id(id, &con).unwrap();
    con.close().unwrap();
    note
}

pub fn count_notes_db() -> u32 {
    let con = open_connection().unwrap();
    let count = con
        .query_row("select count(*) from notes", [], |row| row.get(0))
        .unwrap();
    con.close().unwrap();
    count
}

/// number of files written to this test's upload directory
pub fn count_uploaded_files() -> usize {
    match std::fs::read_dir(upload_dir()) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

pub fn multipart_content_type() -> ContentType {
    ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY))
}

/// builds a multipart body with the passed text fields, and a `pdf` file field if `file` is passed
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, contents)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"pdf\"; filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(contents);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// the form fields for a complete, valid upload
pub fn note_fields<'a>(title: &'a str, subject: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("authorName", "Asha"),
        ("branch", "CSE"),
        ("year", "2"),
        ("semester", "SEM 3"),
        ("subject", subject),
    ]
}
