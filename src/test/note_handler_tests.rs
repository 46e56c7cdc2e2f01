use rocket::http::Status;
use rocket::local::blocking::Client;

use crate::model::api::NoteApi;
use crate::model::response::{BasicMessage, BlockedDeviceMessage, ErrorMessage};
use crate::rocket;
use crate::test::*;

static PDF_CONTENTS: &[u8] = b"%PDF-1.4\n% test note\n%%EOF";

fn client() -> Client {
    Client::tracked(rocket()).unwrap()
}

fn upload(client: &Client, fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (Status, String) {
    let res = client
        .post("/api/upload")
        .header(multipart_content_type())
        .body(multipart_body(fields, file))
        .dispatch();
    (res.status(), res.into_string().unwrap_or_default())
}

fn browse(client: &Client) -> Vec<NoteApi> {
    let res = client
        .get("/api/notes/CSE/2/SEM%203/Data%20Structures")
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    res.into_json().unwrap()
}

#[test]
fn upload_note_success() {
    init_db_folder();
    let client = client();
    let mut fields = note_fields("Trees", "Data Structures");
    fields.push(("deviceId", "deviceA"));
    let (status, body) = upload(&client, &fields, Some(("My Trees (v2).pdf", PDF_CONTENTS)));
    assert_eq!(Status::Ok, status);
    let body: BasicMessage = rocket::serde::json::from_str(&body).unwrap();
    assert_eq!("Note uploaded successfully", body.message);
    let notes = browse(&client);
    assert_eq!(1, notes.len());
    let note = &notes[0];
    assert_eq!("Trees", note.title);
    assert_eq!("Asha", note.author_name);
    assert_eq!("2", note.year);
    assert_eq!(0, note.num_ratings);
    assert_eq!(0.0, note.rating);
    assert!(note.filename.ends_with("-My_Trees__v2_.pdf"));
    assert_eq!(Some("deviceA".to_string()), get_note_db_entry(note.id).device_id);
    assert_eq!(1, count_uploaded_files());
    cleanup();
}

#[test]
fn upload_note_without_device_id() {
    init_db_folder();
    let client = client();
    let fields = note_fields("Trees", "Data Structures");
    let (status, _) = upload(&client, &fields, Some(("trees.pdf", PDF_CONTENTS)));
    assert_eq!(Status::Ok, status);
    let notes = browse(&client);
    assert_eq!(None, get_note_db_entry(notes[0].id).device_id);
    cleanup();
}

#[test]
fn upload_note_missing_file() {
    init_db_folder();
    let client = client();
    let fields = note_fields("Trees", "Data Structures");
    let (status, body) = upload(&client, &fields, None);
    assert_eq!(Status::BadRequest, status);
    let body: ErrorMessage = rocket::serde::json::from_str(&body).unwrap();
    assert_eq!("No file uploaded", body.error);
    assert_eq!(0, count_notes_db());
    cleanup();
}

#[test]
fn upload_note_missing_fields() {
    init_db_folder();
    let client = client();
    let fields = vec![
        ("title", "Trees"),
        ("authorName", "   "),
        ("branch", "CSE"),
        ("year", "2"),
        ("semester", "SEM 3"),
        ("subject", "Data Structures"),
    ];
    let (status, body) = upload(&client, &fields, Some(("trees.pdf", PDF_CONTENTS)));
    assert_eq!(Status::BadRequest, status);
    let body: ErrorMessage = rocket::serde::json::from_str(&body).unwrap();
    assert_eq!(
        "Missing required fields. Please provide all necessary information.",
        body.error
    );
    assert_eq!(0, count_notes_db());
    assert_eq!(0, count_uploaded_files());
    cleanup();
}

#[test]
fn upload_note_free_text_year() {
    init_db_folder();
    let client = client();
    let fields = vec![
        ("title", "Trees"),
        ("authorName", "Asha"),
        ("branch", "CSE"),
        ("year", "Second"),
        ("semester", "SEM 3"),
        ("subject", "Data Structures"),
    ];
    let (status, _) = upload(&client, &fields, Some(("trees.pdf", PDF_CONTENTS)));
    assert_eq!(Status::Ok, status);
    let res = client
        .get("/api/notes/CSE/Second/SEM%203/Data%20Structures")
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let notes: Vec<NoteApi> = res.into_json().unwrap();
    assert_eq!(1, notes.len());
    assert_eq!("Second", notes[0].year);
    cleanup();
}

#[test]
fn upload_note_too_large() {
    init_db_folder();
    let client = client();
    let fields = note_fields("Trees", "Data Structures");
    let contents = vec![b'a'; 50 * 1024 * 1024 + 1];
    let (status, body) = upload(&client, &fields, Some(("trees.pdf", contents.as_slice())));
    assert_eq!(Status::BadRequest, status);
    let body: ErrorMessage = rocket::serde::json::from_str(&body).unwrap();
    assert_eq!("File is larger than 50MB", body.error);
    assert_eq!(0, count_notes_db());
    assert_eq!(0, count_uploaded_files());
    cleanup();
}

#[test]
fn upload_note_not_a_pdf() {
    init_db_folder();
    let client = client();
    let fields = note_fields("Trees", "Data Structures");
    let (status, body) = upload(&client, &fields, Some(("trees.txt", &b"just text"[..])));
    assert_eq!(Status::BadRequest, status);
    let body: ErrorMessage = rocket::serde::json::from_str(&body).unwrap();
    assert_eq!("Only PDF files can be uploaded", body.error);
    assert_eq!(0, count_notes_db());
    assert_eq!(0, count_uploaded_files());
    cleanup();
}

#[test]
fn upload_note_blocked_device() {
    init_db_folder();
    block_device_db_entry("deviceA", Some("spam"));
    let client = client();
    let mut fields = note_fields("Trees", "Data Structures");
    fields.push(("deviceId", "deviceA"));
    let (status, body) = upload(&client, &fields, Some(("trees.pdf", PDF_CONTENTS)));
    assert_eq!(Status::Forbidden, status);
    let body: BlockedDeviceMessage = rocket::serde::json::from_str(&body).unwrap();
    assert_eq!("This device is blocked", body.error);
    assert_eq!(Some("spam".to_string()), body.reason);
    assert_eq!(0, count_notes_db());
    assert_eq!(0, count_uploaded_files());
    cleanup();
}

#[test]
fn search_notes_empty() {
    init_db_folder();
    let client = client();
    assert!(browse(&client).is_empty());
    cleanup();
}

#[test]
fn search_notes_unknown_year_is_empty() {
    init_db_folder();
    let client = client();
    let res = client
        .get("/api/notes/CSE/second/SEM%203/Data%20Structures")
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let notes: Vec<NoteApi> = res.into_json().unwrap();
    assert!(notes.is_empty());
    cleanup();
}

#[test]
fn search_notes_blocked_device() {
    init_db_folder();
    create_note_db_entry("Trees", "Data Structures", None);
    block_device_db_entry("deviceA", Some("spam"));
    let client = client();
    let res = client
        .get("/api/notes/CSE/2/SEM%203/Data%20Structures?deviceId=deviceA")
        .dispatch();
    assert_eq!(Status::Forbidden, res.status());
    let body: BlockedDeviceMessage = res.into_json().unwrap();
    assert_eq!("This device is blocked", body.error);
    assert_eq!(Some("spam".to_string()), body.reason);
    // other devices are unaffected
    let res = client
        .get("/api/notes/CSE/2/SEM%203/Data%20Structures?deviceId=deviceB")
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    cleanup();
}

#[test]
fn download_note_success() {
    init_db_folder();
    let client = client();
    let fields = note_fields("Trees", "Data Structures");
    upload(&client, &fields, Some(("trees.pdf", PDF_CONTENTS)));
    let note = browse(&client).remove(0);
    let res = client.get(format!("/api/download/{}", note.id)).dispatch();
    assert_eq!(Status::Ok, res.status());
    let disposition = res
        .headers()
        .get_one("Content-Disposition")
        .unwrap()
        .to_string();
    assert_eq!(format!(r#"attachment; filename="{}""#, note.filename), disposition);
    assert_eq!(PDF_CONTENTS.to_vec(), res.into_bytes().unwrap());
    cleanup();
}

#[test]
fn download_note_not_found() {
    init_db_folder();
    let client = client();
    let res = client.get("/api/download/42").dispatch();
    assert_eq!(Status::NotFound, res.status());
    let body: ErrorMessage = res.into_json().unwrap();
    assert_eq!("Note not found", body.error);
    cleanup();
}

#[test]
fn download_note_file_missing_from_disk() {
    init_db_folder();
    let id = create_note_db_entry("Trees", "Data Structures", None);
    let client = client();
    let res = client.get(format!("/api/download/{id}")).dispatch();
    assert_eq!(Status::NotFound, res.status());
    cleanup();
}

#[test]
fn unknown_route_is_json() {
    init_db_folder();
    let client = client();
    let res = client.get("/api/nothing-here").dispatch();
    assert_eq!(Status::NotFound, res.status());
    let body: ErrorMessage = res.into_json().unwrap();
    assert_eq!("Not found", body.error);
    cleanup();
}
