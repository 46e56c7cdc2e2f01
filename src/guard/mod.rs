use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rocket::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use sha2::{Digest, Sha256};

use crate::config::NOTES_SERVER_CONFIG;
use crate::model::repository::BlockedDevice;
use crate::service::device_service;
use crate::service::note_service::clean_device_id;

/// used to represent the result of calling `AdminAuth::validate`
#[derive(Debug, PartialEq)]
pub enum ValidateResult {
    Ok,
    /// the server was started without admin credentials
    NotConfigured,
    Invalid,
}

/// basic auth credentials for the developer endpoints. As a request guard, this only succeeds when
/// the credentials match the configured admin username and password
#[derive(Debug)]
pub struct AdminAuth {
    pub username: String,
    pub password: String,
}

impl AdminAuth {
    /// creates an `AdminAuth` object from the passed header value.
    /// The value of header must be base64-encoded basic auth.
    pub fn from(header: &str) -> Result<AdminAuth, &str> {
        // remove the "Basic " from the header, leaving only the base64 part
        let stripped_header = header.trim().trim_start_matches("Basic").trim();
        match STANDARD.decode(stripped_header) {
            Ok(value) => {
                let combined = match String::from_utf8(value) {
                    Ok(c) => c,
                    Err(_) => return Err("Invalid basic auth format: not utf-8"),
                };
                // passwords may contain colons, usernames can't
                let (username, password) = match combined.split_once(':') {
                    Some(parts) => parts,
                    None => return Err("Invalid basic auth format: missing username or password"),
                };
                // credentials are compared exactly as sent, surrounding whitespace included
                if username.is_empty() || password.is_empty() {
                    return Err("Invalid basic auth format: missing username or password");
                }
                Ok(AdminAuth {
                    username: username.to_string(),
                    password: password.to_string(),
                })
            }
            Err(_) => Err("Invalid basic auth format: not base64"),
        }
    }

    /// compares our value with the configured admin credentials
    pub fn validate(&self) -> ValidateResult {
        match NOTES_SERVER_CONFIG.admin.credentials() {
            None => ValidateResult::NotConfigured,
            Some((username, password)) => {
                let expected = AdminAuth {
                    username: username.to_string(),
                    password: password.to_string(),
                };
                if expected.to_string() == self.to_string() {
                    ValidateResult::Ok
                } else {
                    ValidateResult::Invalid
                }
            }
        }
    }

    /// sha256 of `username:password`, so credentials are never compared as plain text
    pub fn to_string(&self) -> String {
        let mut hasher = Sha256::new();
        let combined = format!("{}:{}", self.username, self.password);
        hasher.update(combined.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl<'a> FromRequest<'a> for AdminAuth {
    type Error = AuthError;

    async fn from_request(request: &'a Request<'_>) -> Outcome<Self, Self::Error> {
        // just check if it's basic auth
        fn check_basic_auth(value: &str) -> bool {
            value.starts_with("Basic ")
        }
        let auth = match request.headers().get_one("Authorization") {
            None => return Outcome::Error((Status::Unauthorized, AuthError::Missing)),
            Some(value) if check_basic_auth(value) => match AdminAuth::from(value) {
                Ok(auth) => auth,
                Err(_) => return Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
            },
            Some(_) => return Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
        };
        match auth.validate() {
            ValidateResult::Ok => Outcome::Success(auth),
            ValidateResult::NotConfigured => {
                log::warn!("Refusing developer request because no admin credentials are configured");
                Outcome::Error((Status::Unauthorized, AuthError::NotConfigured))
            }
            ValidateResult::Invalid => {
                log::warn!("Bad developer credentials for user {}", auth.username);
                Outcome::Error((Status::Unauthorized, AuthError::Invalid))
            }
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    Missing,
    Invalid,
    NotConfigured,
}

/// rejects requests whose `deviceId` query parameter belongs to a blocked device.
///
/// The block list entry is cached on the request so the 403 catcher can report the reason.
/// Device ids sent in request bodies are checked by the services that read those bodies
#[derive(Debug)]
pub struct DeviceAccess;

#[async_trait]
impl<'a> FromRequest<'a> for DeviceAccess {
    type Error = BlockedDevice;

    async fn from_request(request: &'a Request<'_>) -> Outcome<Self, Self::Error> {
        let device_id = request
            .query_value::<&str>("deviceId")
            .and_then(|value| value.ok())
            .and_then(|value| clean_device_id(Some(value)));
        match device_service::check_device(device_id.as_deref()) {
            Some(blocked) => {
                let cached = blocked.clone();
                request.local_cache(move || Some(cached));
                Outcome::Error((Status::Forbidden, blocked))
            }
            None => Outcome::Success(DeviceAccess),
        }
    }
}
