//! The bearer-header transform for outgoing requests.
//!
//! Applied exactly once per request, immediately before it is issued. The
//! two authentication endpoints pass through untouched; everything else gets
//! `Authorization: Bearer <token>` when a token is on hand. With no token
//! the request also passes through unmodified; rejecting unauthenticated
//! calls is the backend's job, not the client's.

use reqwest::RequestBuilder;
use reqwest::header;

/// Path of the login endpoint, exempt from authorization.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Path of the signup endpoint, exempt from authorization.
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";

/// Whether requests to `url` carry a bearer token when one is available.
#[must_use]
pub fn is_protected(url: &str) -> bool {
    !url.contains(SIGNUP_ENDPOINT) && !url.contains(LOGIN_ENDPOINT)
}

/// Attach the bearer header where warranted. Pure: the builder is returned
/// either untouched or with exactly one header added.
#[must_use]
pub fn authorize(builder: RequestBuilder, url: &str, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if is_protected(url) => {
            builder.header(header::AUTHORIZATION, format!("Bearer {token}"))
        }
        _ => builder,
    }
}
