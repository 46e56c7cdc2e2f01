use rocket::serde::json::Json;

use crate::model::api::{BlockedDeviceApi, DeviceIdApi, NoteDeviceApi};
use crate::model::response::{BasicMessage, ErrorMessage};

#[derive(Responder)]
pub enum NoteDeviceResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<NoteDeviceApi>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum BlockDeviceResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum UnblockDeviceResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum ListDevicesResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<Vec<DeviceIdApi>>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum ListBlockedDevicesResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<Vec<BlockedDeviceApi>>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}
