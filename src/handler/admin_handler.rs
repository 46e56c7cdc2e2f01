use rocket::serde::json::Json;

use crate::guard::{AdminAuth, DeviceAccess};
use crate::model::api::NoteDeviceApi;
use crate::model::error::device_errors::{BlockDeviceError, ListDevicesError, UnblockDeviceError};
use crate::model::error::note_errors::GetNoteError;
use crate::model::request::BlockDeviceRequest;
use crate::model::response::admin_responses::{
    BlockDeviceResponse, ListBlockedDevicesResponse, ListDevicesResponse, NoteDeviceResponse,
    UnblockDeviceResponse,
};
use crate::model::response::{BasicMessage, ErrorMessage};
use crate::service::device_service;

#[get("/note-device/<id>")]
pub fn get_note_device(id: u32, _auth: AdminAuth, _device: DeviceAccess) -> NoteDeviceResponse {
    match device_service::get_note_device(id) {
        Ok(device_id) => NoteDeviceResponse::Success(Json::from(NoteDeviceApi { device_id })),
        Err(GetNoteError::NotFound) => NoteDeviceResponse::NotFound(ErrorMessage::new("Note not found")),
        Err(GetNoteError::DbError) => {
            NoteDeviceResponse::Failure(ErrorMessage::new("Error getting device ID"))
        }
    }
}

#[post("/block-device", data = "<request>")]
pub fn block_device(
    request: Json<BlockDeviceRequest>,
    _auth: AdminAuth,
    _device: DeviceAccess,
) -> BlockDeviceResponse {
    match device_service::block_device(request.into_inner()) {
        Ok(_) => BlockDeviceResponse::Success(BasicMessage::new("Device blocked successfully")),
        Err(BlockDeviceError::MissingTarget) => BlockDeviceResponse::BadRequest(ErrorMessage::new(
            "Either device ID or note ID is required",
        )),
        Err(BlockDeviceError::NoteNotFound) => {
            BlockDeviceResponse::NotFound(ErrorMessage::new("Note not found"))
        }
        Err(BlockDeviceError::NoteHasNoDevice) => BlockDeviceResponse::BadRequest(
            ErrorMessage::new("This note has no associated device ID"),
        ),
        Err(BlockDeviceError::DbError) => {
            BlockDeviceResponse::Failure(ErrorMessage::new("Failed to block device"))
        }
    }
}

#[delete("/unblock-device/<device_id>")]
pub fn unblock_device(
    device_id: &str,
    _auth: AdminAuth,
    _device: DeviceAccess,
) -> UnblockDeviceResponse {
    match device_service::unblock_device(device_id) {
        Ok(()) => UnblockDeviceResponse::Success(BasicMessage::new("Device unblocked successfully")),
        Err(UnblockDeviceError::MissingDeviceId) => {
            UnblockDeviceResponse::BadRequest(ErrorMessage::new("Device ID is required"))
        }
        Err(UnblockDeviceError::DbError) => {
            UnblockDeviceResponse::Failure(ErrorMessage::new("Failed to unblock device"))
        }
    }
}

/// every note along with the device that uploaded it, for auditing
#[get("/device-ids")]
pub fn list_device_ids(_auth: AdminAuth, _device: DeviceAccess) -> ListDevicesResponse {
    match device_service::list_note_devices() {
        Ok(devices) => ListDevicesResponse::Success(Json::from(devices)),
        Err(ListDevicesError::DbError) => {
            ListDevicesResponse::Failure(ErrorMessage::new("Database error"))
        }
    }
}

#[get("/blocked-devices")]
pub fn list_blocked_devices(_auth: AdminAuth, _device: DeviceAccess) -> ListBlockedDevicesResponse {
    match device_service::list_blocked_devices() {
        Ok(devices) => ListBlockedDevicesResponse::Success(Json::from(devices)),
        Err(ListDevicesError::DbError) => {
            ListBlockedDevicesResponse::Failure(ErrorMessage::new("Database error"))
        }
    }
}
