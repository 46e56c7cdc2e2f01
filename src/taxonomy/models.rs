use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum TaxonomyError {
    /// the branch / year / semester combination does not exist
    NotFound,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SemesterApi {
    pub semester: String,
    pub subjects: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct YearApi {
    pub year: u32,
    pub semesters: Vec<SemesterApi>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BranchApi {
    pub branch: String,
    pub years: Vec<YearApi>,
}
