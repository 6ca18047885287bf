//! The two unauthenticated calls: login and signup.
//!
//! The signup endpoint answers 2xx with a plain-text body, so its response
//! is discarded rather than parsed.

use async_trait::async_trait;

use collegiate_models::auth::{LoginCredentials, LoginReply, SignupRequest};

use crate::authorizer::{LOGIN_ENDPOINT, SIGNUP_ENDPOINT};
use crate::error::ApiError;
use crate::http::Api;

/// Contract the auth flow programs against. Tests substitute scripted
/// implementations.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token and role.
    ///
    /// A 2xx reply is returned as-is; callers decide whether the body is
    /// structurally complete (see [`LoginReply::into_complete`]).
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginReply, ApiError>;

    /// Register a new account.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;
}

/// Client for the authentication endpoints.
#[derive(Clone)]
pub struct AuthApi {
    api: Api,
}

impl AuthApi {
    #[must_use]
    pub fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginReply, ApiError> {
        self.api.post_json(LOGIN_ENDPOINT, credentials).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.api.post_unit(SIGNUP_ENDPOINT, request).await
    }
}
