//! Authentication payloads.
//!
//! This module contains the request and response bodies of the two
//! unauthenticated endpoints, `/api/auth/login` and `/api/auth/signup`.
//! The login reply keeps both fields optional: the backend has answered 2xx
//! with incomplete bodies before, and the flow must treat that as a failure
//! rather than a panic.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Login request with username and password.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct LoginCredentials {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

impl LoginCredentials {
    /// Whether either field is blank after trimming.
    ///
    /// A blank form never reaches the network; this is the local guard, not
    /// an authoritative check.
    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        is_blank(&self.username) || is_blank(&self.password)
    }
}

/// Successful login body.
///
/// Both fields must be present for the login to count; a reply missing
/// either one is a structural failure even though the HTTP call succeeded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginReply {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl LoginReply {
    /// The `(token, role)` pair, if the reply is structurally complete.
    #[must_use]
    pub fn into_complete(self) -> Option<(String, String)> {
        match (self.token, self.role) {
            (Some(token), Some(role)) => Some((token, role)),
            _ => None,
        }
    }
}

/// Signup request. All six fields are required.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Role must not be empty"))]
    pub role: String,
}

impl Default for SignupRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            name: String::new(),
            phone: String::new(),
            password: String::new(),
            email: String::new(),
            role: crate::roles::Role::Student.name().to_string(),
        }
    }
}

impl SignupRequest {
    /// Whether any of the six fields is blank after trimming.
    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        is_blank(&self.username)
            || is_blank(&self.password)
            || is_blank(&self.email)
            || is_blank(&self.role)
            || is_blank(&self.name)
            || is_blank(&self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_blank_guard() {
        let both = LoginCredentials::default();
        assert!(both.has_blank_field());

        let spaces = LoginCredentials {
            username: "  ".into(),
            password: "secret".into(),
        };
        assert!(spaces.has_blank_field());

        let complete = LoginCredentials {
            username: "amartin".into(),
            password: "secret".into(),
        };
        assert!(!complete.has_blank_field());
    }

    #[test]
    fn test_login_reply_complete() {
        let reply = LoginReply {
            token: Some("t1".into()),
            role: Some("ROLE_FACULTY".into()),
        };
        assert_eq!(
            reply.into_complete(),
            Some(("t1".into(), "ROLE_FACULTY".into()))
        );
    }

    #[test]
    fn test_login_reply_missing_fields() {
        let missing_role = LoginReply {
            token: Some("t1".into()),
            role: None,
        };
        assert_eq!(missing_role.into_complete(), None);

        let missing_token = LoginReply {
            token: None,
            role: Some("ROLE_ADMIN".into()),
        };
        assert_eq!(missing_token.into_complete(), None);

        assert_eq!(LoginReply::default().into_complete(), None);
    }

    #[test]
    fn test_login_reply_deserializes_partial_body() {
        let reply: LoginReply = serde_json::from_str(r#"{"role":"ROLE_ADMIN"}"#).unwrap();
        assert!(reply.token.is_none());
        assert_eq!(reply.role.as_deref(), Some("ROLE_ADMIN"));
    }

    #[test]
    fn test_signup_default_role() {
        assert_eq!(SignupRequest::default().role, "STUDENT");
    }

    #[test]
    fn test_signup_blank_guard() {
        let mut req = SignupRequest {
            username: "amartin".into(),
            name: "Avery Martin".into(),
            phone: "5550100".into(),
            password: "secret".into(),
            email: "avery@college.edu".into(),
            role: "STUDENT".into(),
        };
        assert!(!req.has_blank_field());

        req.phone = " ".into();
        assert!(req.has_blank_field());
    }

    #[test]
    fn test_signup_validation() {
        let req = SignupRequest {
            username: "amartin".into(),
            name: "Avery Martin".into(),
            phone: "5550100".into(),
            password: "secret".into(),
            email: "not-an-email".into(),
            role: "STUDENT".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_serializes_wire_fields() {
        let creds = LoginCredentials {
            username: "amartin".into(),
            password: "secret".into(),
        };
        let serialized = serde_json::to_string(&creds).unwrap();
        assert!(serialized.contains(r#""username":"amartin""#));
        assert!(serialized.contains(r#""password":"secret""#));
    }
}
