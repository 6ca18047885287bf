//! # Collegiate Client
//!
//! The HTTP layer of the Collegiate client: everything that talks to the
//! college API lives here.
//!
//! - [`error`]: the failure taxonomy every call maps into
//! - [`authorizer`]: the bearer-header transform applied to outgoing requests
//! - [`http`]: the request plumbing (base URL, timeouts, request logging)
//! - [`auth`]: the two unauthenticated calls, login and signup
//! - [`resource`]: the generic gateway to one REST collection
//!
//! Every operation is a single round trip: no caching, no retries. Failures
//! are terminal for the attempt and surface to the calling screen.

pub mod auth;
pub mod authorizer;
pub mod error;
pub mod http;
pub mod resource;

// Re-export commonly used types at crate root
pub use auth::{AuthApi, AuthGateway};
pub use authorizer::{LOGIN_ENDPOINT, SIGNUP_ENDPOINT, authorize, is_protected};
pub use error::ApiError;
pub use http::Api;
pub use resource::{ResourceGateway, RestResource};
