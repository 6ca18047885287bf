//! User-account entities and drafts.
//!
//! Accounts are what the admin user screen manages: login identity plus
//! contact details and a role. The backend never returns passwords; drafts
//! carry one only when the operator typed a replacement, and an empty string
//! on edit otherwise, matching what the backend expects.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::UserId;
use crate::resource::Resource;
use crate::roles::Role;

/// A user account, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Draft for creating or fully replacing a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 100, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 20, message = "Phone must not be empty"))]
    pub phone: String,
    pub password: String,
    #[validate(length(min = 1, message = "Role must not be empty"))]
    pub role: String,
}

impl Default for UserRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            role: Role::Student.name().to_string(),
        }
    }
}

/// Marker for the users REST collection.
#[derive(Debug)]
pub struct Users;

impl Resource for Users {
    type Entity = User;
    type Draft = UserRequest;
    type Id = UserId;

    const BASE_PATH: &'static str = "/api/users";
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn id(entity: &User) -> UserId {
        entity.id
    }

    fn display_name(entity: &User) -> String {
        entity.username.clone()
    }

    fn draft_from(entity: &User) -> UserRequest {
        UserRequest {
            username: entity.username.clone(),
            name: entity.name.clone(),
            email: entity.email.clone(),
            phone: entity.phone.clone(),
            // Never echoed by the backend; edits start blank
            password: String::new(),
            role: entity
                .role
                .clone()
                .unwrap_or_else(|| Role::Student.name().to_string()),
        }
    }
}
