//! Role tags and post-login navigation.
//!
//! The backend tags each account with a `ROLE_*` string; the client uses the
//! tag to pick the dashboard a login lands on and the heading/icon shown on
//! the login screen. Unrecognized tags deliberately fall back to the student
//! variants rather than failing.

use serde::{Deserialize, Serialize};

/// A known account role.
///
/// The session stores the raw tag string, not this enum, so unknown roles
/// issued by the backend survive a round trip through storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Faculty,
    Student,
    Department,
}

impl Role {
    /// All roles, in the order the signup form offers them.
    pub const ALL: [Role; 4] = [Role::Student, Role::Faculty, Role::Department, Role::Admin];

    /// The authority tag the backend attaches to this role.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Faculty => "ROLE_FACULTY",
            Role::Student => "ROLE_STUDENT",
            Role::Department => "ROLE_DEPARTMENT",
        }
    }

    /// The bare name used in signup payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Faculty => "FACULTY",
            Role::Student => "STUDENT",
            Role::Department => "DEPARTMENT",
        }
    }

    /// Parse an authority tag. Returns `None` for unknown tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_FACULTY" => Some(Role::Faculty),
            "ROLE_STUDENT" => Some(Role::Student),
            "ROLE_DEPARTMENT" => Some(Role::Department),
            _ => None,
        }
    }

    /// Login-screen heading for this role.
    #[must_use]
    pub const fn login_heading(self) -> &'static str {
        match self {
            Role::Admin => "Admin Login",
            Role::Faculty => "Faculty Login",
            Role::Department => "Department Login",
            Role::Student => "Student Login",
        }
    }

    /// Login-screen icon tag for this role.
    #[must_use]
    pub const fn login_icon(self) -> &'static str {
        match self {
            Role::Admin => "bi-shield-lock",
            Role::Faculty => "bi-person-badge",
            Role::Department => "bi-building",
            Role::Student => "bi-person-circle",
        }
    }
}

/// Heading for the login screen given the stored role tag, if any.
///
/// Unknown or absent tags render the student heading.
#[must_use]
pub fn login_heading(tag: Option<&str>) -> &'static str {
    tag.and_then(Role::from_tag)
        .unwrap_or(Role::Student)
        .login_heading()
}

/// Icon for the login screen given the stored role tag, if any.
#[must_use]
pub fn login_icon(tag: Option<&str>) -> &'static str {
    tag.and_then(Role::from_tag)
        .unwrap_or(Role::Student)
        .login_icon()
}

/// A client-side navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AdminDashboard,
    FacultyDashboard,
    DepartmentDashboard,
    StudentDashboard,
    Login,
}

impl Route {
    /// The route path, without a leading slash.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::AdminDashboard => "admin-dashboard",
            Route::FacultyDashboard => "faculty-dashboard",
            Route::DepartmentDashboard => "department-dashboard",
            Route::StudentDashboard => "student-dashboard",
            Route::Login => "login",
        }
    }

    /// The dashboard a freshly logged-in account lands on.
    ///
    /// Anything other than the admin, faculty, and department tags routes to
    /// the student dashboard, including unrecognized tags.
    #[must_use]
    pub fn for_role(tag: &str) -> Route {
        match tag {
            "ROLE_ADMIN" => Route::AdminDashboard,
            "ROLE_FACULTY" => Route::FacultyDashboard,
            "ROLE_DEPARTMENT" => Route::DepartmentDashboard,
            _ => Route::StudentDashboard,
        }
    }
}
