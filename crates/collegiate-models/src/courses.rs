//! Course entities and drafts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{CourseId, FacultyId};
use crate::resource::Resource;

/// A course, as returned by the backend.
///
/// The assigned faculty is optional; unassigned courses carry neither the id
/// nor the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
    pub credits: String,
    pub durations: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<FacultyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
}

/// Draft for creating or fully replacing a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub course_name: String,
    #[validate(length(min = 1, message = "Credits must not be empty"))]
    pub credits: String,
    #[validate(length(min = 1, message = "Duration must not be empty"))]
    pub durations: String,
    pub faculty_id: FacultyId,
}

/// Marker for the courses REST collection.
#[derive(Debug)]
pub struct Courses;

impl Resource for Courses {
    type Entity = Course;
    type Draft = CourseRequest;
    type Id = CourseId;

    const BASE_PATH: &'static str = "/api/courses";
    const SINGULAR: &'static str = "course";
    const PLURAL: &'static str = "courses";

    fn id(entity: &Course) -> CourseId {
        entity.course_id
    }

    fn display_name(entity: &Course) -> String {
        entity.course_name.clone()
    }

    fn draft_from(entity: &Course) -> CourseRequest {
        CourseRequest {
            course_name: entity.course_name.clone(),
            credits: entity.credits.clone(),
            durations: entity.durations.clone(),
            faculty_id: entity.faculty_id.unwrap_or_default(),
        }
    }
}
