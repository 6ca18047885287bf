//! Student entities and drafts.
//!
//! The committed entity carries the department as a display name; the draft
//! carries a department id, because that is what the backend accepts on
//! writes. Name-to-id resolution is not derivable from the list payload;
//! see [`DepartmentDirectory`](crate::departments::DepartmentDirectory).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::departments::DepartmentDirectory;
use crate::ids::{DepartmentId, StudentId};
use crate::resource::Resource;

/// A student, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub student_name: String,
    pub email: String,
    pub course: String,
    pub branch: String,
    pub address: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub department_name: String,
}

/// Draft for creating or fully replacing a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub student_name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Course must not be empty"))]
    pub course: String,
    #[validate(length(min = 1, message = "Branch must not be empty"))]
    pub branch: String,
    #[validate(length(min = 1, message = "Address must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, max = 20, message = "Phone number must not be empty"))]
    pub phone_number: String,
    #[validate(required(message = "Date of birth is required"))]
    pub date_of_birth: Option<NaiveDate>,
    pub department_id: DepartmentId,
}

impl StudentRequest {
    /// Snapshot a committed student into an edit draft, resolving the
    /// department display name through the given directory.
    ///
    /// Names the directory cannot resolve leave the draft pointed at
    /// [`DepartmentId::UNRESOLVED`]; submitting such a draft is the caller's
    /// decision.
    #[must_use]
    pub fn from_student(student: &Student, directory: &dyn DepartmentDirectory) -> Self {
        Self {
            student_name: student.student_name.clone(),
            email: student.email.clone(),
            course: student.course.clone(),
            branch: student.branch.clone(),
            address: student.address.clone(),
            phone_number: student.phone_number.clone(),
            date_of_birth: Some(student.date_of_birth),
            department_id: directory
                .id_by_name(&student.department_name)
                .unwrap_or(DepartmentId::UNRESOLVED),
        }
    }
}

/// Marker for the students REST collection.
#[derive(Debug)]
pub struct Students;

impl Resource for Students {
    type Entity = Student;
    type Draft = StudentRequest;
    type Id = StudentId;

    const BASE_PATH: &'static str = "/api/students";
    const SINGULAR: &'static str = "student";
    const PLURAL: &'static str = "students";

    fn id(entity: &Student) -> StudentId {
        entity.student_id
    }

    fn display_name(entity: &Student) -> String {
        entity.student_name.clone()
    }

    fn draft_from(entity: &Student) -> StudentRequest {
        StudentRequest::from_student(entity, &crate::departments::UnmappedDirectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::departments::UnmappedDirectory;

    fn sample_student() -> Student {
        Student {
            student_id: StudentId::new(4),
            student_name: "Avery Martin".into(),
            email: "avery@college.edu".into(),
            course: "B.Tech".into(),
            branch: "CSE".into(),
            address: "12 College Rd".into(),
            phone_number: "5550100".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2003, 5, 1).unwrap(),
            department_name: "Computer Science".into(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let student = sample_student();
        let serialized = serde_json::to_string(&student).unwrap();
        assert!(serialized.contains(r#""studentId":4"#));
        assert!(serialized.contains(r#""studentName":"Avery Martin""#));
        assert!(serialized.contains(r#""dateOfBirth":"2003-05-01""#));
        assert!(serialized.contains(r#""departmentName":"Computer Science""#));
    }

    #[test]
    fn test_draft_snapshot_is_independent() {
        let student = sample_student();
        let mut draft = Students::draft_from(&student);
        draft.student_name = "Someone Else".into();
        assert_eq!(student.student_name, "Avery Martin");
    }

    #[test]
    fn test_draft_department_unresolved() {
        let draft = StudentRequest::from_student(&sample_student(), &UnmappedDirectory);
        assert_eq!(draft.department_id, DepartmentId::UNRESOLVED);
    }

    #[test]
    fn test_empty_draft_fails_validation() {
        assert!(StudentRequest::default().validate().is_err());
    }

    #[test]
    fn test_complete_draft_validates() {
        let draft = StudentRequest::from_student(&sample_student(), &UnmappedDirectory);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_resource_metadata() {
        assert_eq!(Students::BASE_PATH, "/api/students");
        assert_eq!(Students::SINGULAR, "student");
        assert_eq!(Students::PLURAL, "students");
        let student = sample_student();
        assert_eq!(Students::id(&student), StudentId::new(4));
        assert_eq!(Students::display_name(&student), "Avery Martin");
    }
}
