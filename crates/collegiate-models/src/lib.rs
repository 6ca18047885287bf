//! # Collegiate Models
//!
//! Domain models and DTOs for the Collegiate client.
//!
//! This crate provides the data structures exchanged with the college API:
//! resource entities, creation/update request DTOs, authentication payloads,
//! and the [`Resource`] descriptor that ties an entity, its draft type, and
//! its REST collection together.
//!
//! # Modules
//!
//! - [`auth`]: login and signup payloads
//! - [`courses`]: course entities and drafts
//! - [`departments`]: department entities, drafts, and the name-lookup seam
//! - [`faculty`]: faculty entities and drafts
//! - [`ids`]: strongly-typed numeric ID newtypes
//! - [`resource`]: the resource descriptor trait
//! - [`roles`]: role tags and post-login navigation
//! - [`students`]: student entities and drafts
//! - [`users`]: account entities and drafts
//!
//! # Example
//!
//! ```ignore
//! use collegiate_models::students::{Student, StudentRequest, Students};
//! use collegiate_models::resource::Resource;
//!
//! let draft = Students::draft_from(&student);
//! assert_eq!(Students::SINGULAR, "student");
//! ```

pub mod auth;
pub mod courses;
pub mod departments;
pub mod faculty;
pub mod ids;
pub mod resource;
pub mod roles;
pub mod students;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginCredentials, LoginReply, SignupRequest};
pub use courses::{Course, CourseRequest, Courses};
pub use departments::{
    Department, DepartmentDirectory, DepartmentRequest, Departments, UnmappedDirectory,
};
pub use faculty::{Faculties, Faculty, FacultyRequest};
pub use ids::{CourseId, DepartmentId, FacultyId, StudentId, UserId};
pub use resource::Resource;
pub use roles::{Role, Route};
pub use students::{Student, StudentRequest, Students};
pub use users::{User, UserRequest, Users};
