//! Strongly-typed ID newtypes for domain entities.
//!
//! This module provides newtype wrappers around the backend's numeric
//! identifiers, preventing accidental misuse of IDs (e.g., passing a
//! `DepartmentId` where a `StudentId` is expected). Identities are assigned
//! by the backend on creation and are immutable afterwards; the client never
//! generates one.
//!
//! # Example
//!
//! ```ignore
//! use collegiate_models::ids::{DepartmentId, StudentId};
//!
//! fn get_student(id: StudentId) { /* ... */ }
//!
//! let student_id = StudentId::new(17);
//! get_student(student_id);                 // OK
//! // get_student(DepartmentId::new(17));   // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a newtype wrapper around `i64` with the trait implementations
/// needed for serialization, display, and command-line parsing.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an ID from a raw backend identifier.
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// The raw numeric value.
            #[inline]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a student.
    StudentId
);

define_id!(
    /// Identifier of a faculty member.
    FacultyId
);

define_id!(
    /// Identifier of a course.
    CourseId
);

define_id!(
    /// Identifier of a department.
    DepartmentId
);

define_id!(
    /// Identifier of a user account.
    UserId
);

impl DepartmentId {
    /// Placeholder id used when a department name cannot be resolved.
    ///
    /// The list payload carries department names only; see
    /// [`DepartmentDirectory`](crate::departments::DepartmentDirectory).
    pub const UNRESOLVED: DepartmentId = DepartmentId(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_transparent() {
        let id = StudentId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: StudentId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(FacultyId::new(7).to_string(), "7");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("19".parse::<CourseId>().unwrap(), CourseId::new(19));
        assert!("nineteen".parse::<CourseId>().is_err());
    }

    #[test]
    fn test_conversions() {
        let id: UserId = 3_i64.into();
        assert_eq!(i64::from(id), 3);
        assert_eq!(id.value(), 3);
    }

    #[test]
    fn test_unresolved_department() {
        assert_eq!(DepartmentId::UNRESOLVED.value(), 0);
        assert_eq!(DepartmentId::default(), DepartmentId::UNRESOLVED);
    }
}
