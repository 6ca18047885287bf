//! Faculty entities and drafts.
//!
//! Faculty is the one collection the backend also exposes paginated, at
//! `/api/faculties/paginated`; the default sort there is by `facultyId`
//! ascending.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::FacultyId;
use crate::resource::Resource;

/// A faculty member, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub faculty_id: FacultyId,
    pub faculty_name: String,
    pub designation: String,
    pub email: String,
    pub phone_number: String,
    pub specialization: String,
}

/// Draft for creating or fully replacing a faculty member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FacultyRequest {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub faculty_name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Specialization must not be empty"))]
    pub specialization: String,
    #[validate(length(min = 1, max = 20, message = "Phone number must not be empty"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Designation must not be empty"))]
    pub designation: String,
}

/// Marker for the faculties REST collection.
#[derive(Debug)]
pub struct Faculties;

/// Sort field used by the paginated faculty listing.
pub const FACULTY_SORT_FIELD: &str = "facultyId";

impl Resource for Faculties {
    type Entity = Faculty;
    type Draft = FacultyRequest;
    type Id = FacultyId;

    const BASE_PATH: &'static str = "/api/faculties";
    const SINGULAR: &'static str = "faculty";
    const PLURAL: &'static str = "faculties";

    fn id(entity: &Faculty) -> FacultyId {
        entity.faculty_id
    }

    fn display_name(entity: &Faculty) -> String {
        entity.faculty_name.clone()
    }

    fn draft_from(entity: &Faculty) -> FacultyRequest {
        FacultyRequest {
            faculty_name: entity.faculty_name.clone(),
            email: entity.email.clone(),
            specialization: entity.specialization.clone(),
            phone_number: entity.phone_number.clone(),
            designation: entity.designation.clone(),
        }
    }
}
