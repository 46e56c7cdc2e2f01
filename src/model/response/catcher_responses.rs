use rocket::http::Header;
use rocket::serde::json::Json;

use crate::model::response::{BlockedDeviceMessage, ErrorMessage};

#[derive(Responder)]
#[response(status = 401, content_type = "json")]
pub struct UnauthorizedResponse {
    pub body: Json<ErrorMessage>,
    pub challenge: Header<'static>,
}

#[derive(Responder)]
pub enum ForbiddenResponse {
    #[response(status = 403, content_type = "json")]
    Blocked(Json<BlockedDeviceMessage>),
    #[response(status = 403, content_type = "json")]
    Generic(Json<ErrorMessage>),
}
