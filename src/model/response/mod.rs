use chrono::NaiveDateTime;
use rocket::http::Header;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::BlockedDevice;

pub mod admin_responses;
pub mod catcher_responses;
pub mod note_responses;
pub mod rating_responses;

/// represents a basic json message, used for successful operations that don't return data
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

/// the body of every failed request
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct ErrorMessage {
    pub error: String,
}

/// sent back when a request carries the id of a blocked device
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct BlockedDeviceMessage {
    pub error: String,
    pub reason: Option<String>,
    #[serde(rename = "blockedAt")]
    pub blocked_at: NaiveDateTime,
}

// ----------------------------------

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}

impl ErrorMessage {
    pub fn new(error: &str) -> Json<ErrorMessage> {
        Json::from(ErrorMessage {
            error: error.to_string(),
        })
    }
}

impl From<BlockedDevice> for BlockedDeviceMessage {
    fn from(value: BlockedDevice) -> Self {
        Self {
            error: "This device is blocked".to_string(),
            reason: value.reason,
            blocked_at: value.blocked_at,
        }
    }
}

impl BlockedDeviceMessage {
    pub fn new(device: BlockedDevice) -> Json<BlockedDeviceMessage> {
        Json::from(BlockedDeviceMessage::from(device))
    }
}

/// tells the browser to prompt for developer credentials
pub fn auth_challenge() -> Header<'static> {
    Header::new("WWW-Authenticate", r#"Basic realm="Developer Access""#)
}

/// makes the browser save the response as a file named `file_name`
pub fn attachment(file_name: &str) -> Header<'static> {
    Header::new(
        "Content-Disposition",
        format!(r#"attachment; filename="{file_name}""#),
    )
}
