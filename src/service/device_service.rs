use std::backtrace::Backtrace;

use crate::model::api::{BlockedDeviceApi, DeviceIdApi};
use crate::model::error::device_errors::{BlockDeviceError, ListDevicesError, UnblockDeviceError};
use crate::model::error::note_errors::GetNoteError;
use crate::model::repository::BlockedDevice;
use crate::model::request::BlockDeviceRequest;
use crate::repository::{self, blocked_device_repository, note_repository};

/// returns the block list entry for `device_id` if the device is blocked.
///
/// Requests without a device id are never blocked. If the block list can't be read, the failure is
/// logged and the device is let through
pub fn check_device(device_id: Option<&str>) -> Option<BlockedDevice> {
    let device_id = device_id?;
    let blocked = repository::open_connection()
        .and_then(|con| blocked_device_repository::get_blocked_device(device_id, &con));
    match blocked {
        Ok(blocked) => blocked,
        Err(e) => {
            log::error!(
                "Failed to check if device {device_id} is blocked, letting it through: {e:?}\n{}",
                Backtrace::force_capture()
            );
            None
        }
    }
}

/// returns the id of the device that uploaded the note, which may be `None` if the uploader didn't send one
pub fn get_note_device(note_id: u32) -> Result<Option<String>, GetNoteError> {
    let note =
        repository::open_connection().and_then(|con| note_repository::get_by_id(note_id, &con));
    match note {
        Ok(note) => Ok(note.device_id),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetNoteError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to look up the device for note {note_id}: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetNoteError::DbError)
        }
    }
}

/// adds a device to the block list and returns the id that was blocked.
///
/// When a note id is passed, the device that uploaded that note is the one blocked, even if a device id was passed too
pub fn block_device(request: BlockDeviceRequest) -> Result<String, BlockDeviceError> {
    let requested_device = request
        .device_id
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    if requested_device.is_none() && request.note_id.is_none() {
        return Err(BlockDeviceError::MissingTarget);
    }
    let con = match repository::open_connection() {
        Ok(con) => con,
        Err(e) => {
            log::error!(
                "Failed to open database to block a device: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(BlockDeviceError::DbError);
        }
    };
    let target = match request.note_id {
        Some(note_id) => match note_repository::get_by_id(note_id, &con) {
            Ok(note) => note.device_id.ok_or(BlockDeviceError::NoteHasNoDevice)?,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(BlockDeviceError::NoteNotFound)
            }
            Err(e) => {
                log::error!(
                    "Failed to look up note {note_id} to block its device: {e:?}\n{}",
                    Backtrace::force_capture()
                );
                return Err(BlockDeviceError::DbError);
            }
        },
        // checked above, one of the two is always present
        None => requested_device.unwrap_or_default(),
    };
    let reason = request.reason.as_deref().filter(|r| !r.trim().is_empty());
    match blocked_device_repository::block_device(&target, reason, &con) {
        Ok(()) => {
            log::info!("Blocked device {target}");
            Ok(target)
        }
        Err(e) => {
            log::error!(
                "Failed to block device {target}: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(BlockDeviceError::DbError)
        }
    }
}

/// removes the device from the block list. Unblocking a device that isn't blocked is not an error
pub fn unblock_device(device_id: &str) -> Result<(), UnblockDeviceError> {
    let device_id = device_id.trim();
    if device_id.is_empty() {
        return Err(UnblockDeviceError::MissingDeviceId);
    }
    let res = repository::open_connection()
        .and_then(|con| blocked_device_repository::unblock_device(device_id, &con));
    match res {
        Ok(()) => {
            log::info!("Unblocked device {device_id}");
            Ok(())
        }
        Err(e) => {
            log::error!(
                "Failed to unblock device {device_id}: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UnblockDeviceError::DbError)
        }
    }
}

pub fn list_note_devices() -> Result<Vec<DeviceIdApi>, ListDevicesError> {
    match repository::open_connection().and_then(|con| note_repository::get_note_devices(&con)) {
        Ok(devices) => Ok(devices.into_iter().map(DeviceIdApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list note devices: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ListDevicesError::DbError)
        }
    }
}

pub fn list_blocked_devices() -> Result<Vec<BlockedDeviceApi>, ListDevicesError> {
    let blocked = repository::open_connection()
        .and_then(|con| blocked_device_repository::get_all_blocked_devices(&con));
    match blocked {
        Ok(devices) => Ok(devices.into_iter().map(BlockedDeviceApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list blocked devices: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ListDevicesError::DbError)
        }
    }
}
