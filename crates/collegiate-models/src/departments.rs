//! Department entities, drafts, and the name-lookup seam.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::DepartmentId;
use crate::resource::Resource;

/// A department, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: DepartmentId,
    pub department_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_of_department: Option<String>,
}

/// Draft for creating or fully replacing a department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub department_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_of_department: Option<String>,
}

/// Resolves a department's display name to its identity.
///
/// Student list payloads carry only `departmentName`, while student writes
/// need `departmentId`. The backend offers no lookup by name, so edits
/// cannot recover the id from the listing alone; this trait is the seam
/// where such a capability would plug in.
pub trait DepartmentDirectory {
    fn id_by_name(&self, name: &str) -> Option<DepartmentId>;
}

/// Directory that resolves nothing.
///
/// TODO: resolve against `GET /api/departments` instead of leaving edited
/// student drafts unmapped.
pub struct UnmappedDirectory;

impl DepartmentDirectory for UnmappedDirectory {
    fn id_by_name(&self, _name: &str) -> Option<DepartmentId> {
        None
    }
}

/// Marker for the departments REST collection.
#[derive(Debug)]
pub struct Departments;

impl Resource for Departments {
    type Entity = Department;
    type Draft = DepartmentRequest;
    type Id = DepartmentId;

    const BASE_PATH: &'static str = "/api/departments";
    const SINGULAR: &'static str = "department";
    const PLURAL: &'static str = "departments";

    fn id(entity: &Department) -> DepartmentId {
        entity.department_id
    }

    fn display_name(entity: &Department) -> String {
        entity.department_name.clone()
    }

    fn draft_from(entity: &Department) -> DepartmentRequest {
        DepartmentRequest {
            department_name: entity.department_name.clone(),
            head_of_department: entity.head_of_department.clone(),
        }
    }
}
