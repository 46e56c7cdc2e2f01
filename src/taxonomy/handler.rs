use rocket::serde::json::Json;

use crate::guard::DeviceAccess;
use crate::model::response::ErrorMessage;
use crate::taxonomy::{self, BranchApi, TaxonomyError};

#[derive(Responder)]
pub enum GetSubjectsResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<Vec<&'static str>>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorMessage>),
}

/// the whole branch -> year -> semester -> subject tree, used to build the selection menus
#[get("/")]
pub fn get_taxonomy(_device: DeviceAccess) -> Json<Vec<BranchApi>> {
    Json::from(taxonomy::full_taxonomy())
}

#[get("/branches")]
pub fn get_branches(_device: DeviceAccess) -> Json<Vec<&'static str>> {
    Json::from(taxonomy::branches())
}

#[get("/semesters/<year>")]
pub fn get_semesters(year: u32, _device: DeviceAccess) -> Json<Vec<&'static str>> {
    Json::from(taxonomy::semesters(year))
}

#[get("/subjects/<branch>/<year>/<semester>")]
pub fn get_subjects(
    branch: &str,
    year: u32,
    semester: &str,
    _device: DeviceAccess,
) -> GetSubjectsResponse {
    match taxonomy::subjects(branch, year, semester) {
        Ok(subjects) => GetSubjectsResponse::Success(Json::from(subjects)),
        Err(TaxonomyError::NotFound) => GetSubjectsResponse::NotFound(ErrorMessage::new(
            "No subjects exist for that branch, year, and semester",
        )),
    }
}
