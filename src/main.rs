#[macro_use]
extern crate rocket;

use std::path::Path;

use rocket::data::{ByteUnit, Limits};
use rocket::fs::FileServer;
use rocket::{Build, Rocket};

use handler::{
    admin_handler::{
        block_device, get_note_device, list_blocked_devices, list_device_ids, unblock_device,
    },
    catchers::{
        bad_request, forbidden, internal_error, not_found, payload_too_large, unauthorized,
        unprocessable_entity,
    },
    note_handler::{download_note, search_notes, upload_note},
    rating_handler::rate_note,
};
use taxonomy::handler::{get_branches, get_semesters, get_subjects, get_taxonomy};

use crate::config::NOTES_SERVER_CONFIG;
use crate::repository::initialize_db;

mod config;
mod guard;
mod handler;
#[cfg(not(test))]
mod logging;
mod model;
mod repository;
mod service;
mod taxonomy;
#[cfg(test)]
mod test;

/// extra room on top of the max file size so slightly oversized files reach the upload handler and get a proper error
static UPLOAD_LIMIT_SLACK: u64 = 8 * 1024 * 1024;

#[launch]
fn rocket() -> Rocket<Build> {
    #[cfg(not(test))]
    logging::init_logger();
    if let Err(e) = initialize_db() {
        log::error!("Failed to initialize the database: {e:?}");
        panic!("Failed to initialize the database: {e:?}");
    }
    let upload_limit =
        ByteUnit::from(NOTES_SERVER_CONFIG.uploads.max_file_size_bytes() + UPLOAD_LIMIT_SLACK);
    let figment = rocket::Config::figment().merge((
        "limits",
        Limits::default()
            .limit("file", upload_limit)
            .limit("data-form", upload_limit),
    ));
    let rocket = rocket::custom(figment)
        .mount(
            "/api",
            routes![search_notes, upload_note, rate_note, download_note],
        )
        .mount(
            "/api/dev",
            routes![
                get_note_device,
                block_device,
                unblock_device,
                list_device_ids,
                list_blocked_devices
            ],
        )
        .mount(
            "/api/taxonomy",
            routes![get_taxonomy, get_branches, get_semesters, get_subjects],
        )
        .register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                forbidden,
                not_found,
                payload_too_large,
                unprocessable_entity,
                internal_error
            ],
        );
    let static_dir = NOTES_SERVER_CONFIG.client.static_directory.as_str();
    if Path::new(static_dir).is_dir() {
        rocket.mount("/", FileServer::from(static_dir))
    } else {
        log::warn!("Static directory {static_dir} does not exist, the browsing page will not be served");
        rocket
    }
}
