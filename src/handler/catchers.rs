use rocket::serde::json::Json;
use rocket::Request;

use crate::model::repository::BlockedDevice;
use crate::model::response::catcher_responses::{ForbiddenResponse, UnauthorizedResponse};
use crate::model::response::{auth_challenge, BlockedDeviceMessage, ErrorMessage};

// every error leaves the server as json instead of rocket's default html pages

#[catch(400)]
pub fn bad_request() -> Json<ErrorMessage> {
    ErrorMessage::new("Bad request")
}

#[catch(401)]
pub fn unauthorized() -> UnauthorizedResponse {
    UnauthorizedResponse {
        body: ErrorMessage::new("Unauthorized"),
        challenge: auth_challenge(),
    }
}

/// the device guard caches the block list entry before failing, so the reason can be reported here
#[catch(403)]
pub fn forbidden(request: &Request) -> ForbiddenResponse {
    match request.local_cache(|| None::<BlockedDevice>) {
        Some(blocked) => ForbiddenResponse::Blocked(BlockedDeviceMessage::new(blocked.clone())),
        None => ForbiddenResponse::Generic(ErrorMessage::new("Forbidden")),
    }
}

#[catch(404)]
pub fn not_found() -> Json<ErrorMessage> {
    ErrorMessage::new("Not found")
}

#[catch(413)]
pub fn payload_too_large() -> Json<ErrorMessage> {
    ErrorMessage::new("File is larger than 50MB")
}

#[catch(422)]
pub fn unprocessable_entity() -> Json<ErrorMessage> {
    ErrorMessage::new("Invalid request")
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorMessage> {
    ErrorMessage::new("Server error")
}
