//! The login and signup flows.
//!
//! Login is the only writer of the session store. Both flows guard blank
//! fields locally before any network call; the guard is a convenience, not
//! an authority, and the backend revalidates everything.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use collegiate_client::AuthGateway;
use collegiate_models::auth::{LoginCredentials, SignupRequest};
use collegiate_models::roles::Route;
use collegiate_session::{Session, SessionError, SessionStore};

/// Surfaced when either login field is blank.
pub const MSG_MISSING_CREDENTIALS: &str = "Please enter username and password.";
/// Surfaced when a 2xx login reply lacks the token or the role.
pub const MSG_INVALID_RESPONSE: &str = "Invalid response from server.";
/// Surfaced when login fails without a server-supplied message.
pub const MSG_LOGIN_FAILED: &str = "Invalid credentials or server error.";
/// Surfaced when any signup field is blank.
pub const MSG_MISSING_SIGNUP_FIELDS: &str = "Please fill all fields.";
/// Shown after a successful signup.
pub const MSG_SIGNUP_SUCCESS: &str = "Signup successful! Please login.";
/// Friendlier rewrite of the backend's duplicate-username rejection.
pub const MSG_DUPLICATE_USERNAME: &str = "Username already exists, please choose another.";
/// Surfaced when signup fails without a server-supplied message.
pub const MSG_SIGNUP_FAILED: &str = "Signup failed.";

/// How long the signup confirmation stays up before redirecting to login.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session committed; navigate to the role's dashboard.
    Success { route: Route },
    /// Rejected locally or by the backend; nothing was stored.
    Failure { message: String },
}

/// Result of a signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account created; show the confirmation, then redirect.
    Success {
        message: String,
        redirect: Route,
        redirect_after: Duration,
    },
    Failure {
        message: String,
    },
}

/// The login flow.
pub struct LoginScreen<A: AuthGateway> {
    auth: A,
    session: Arc<SessionStore>,
}

impl<A: AuthGateway> LoginScreen<A> {
    #[must_use]
    pub fn new(auth: A, session: Arc<SessionStore>) -> Self {
        Self { auth, session }
    }

    /// Attempt a login.
    ///
    /// Blank fields never reach the network. A 2xx reply missing the token
    /// or role counts as a failure and leaves any existing session
    /// untouched. On success both session values are committed together and
    /// the role picks the landing route, unknown roles falling back to the
    /// student dashboard.
    pub async fn login(&self, credentials: &LoginCredentials) -> LoginOutcome {
        if credentials.has_blank_field() {
            return LoginOutcome::Failure {
                message: MSG_MISSING_CREDENTIALS.to_string(),
            };
        }

        let reply = match self.auth.login(credentials).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "Login rejected");
                return LoginOutcome::Failure {
                    message: err
                        .server_message()
                        .unwrap_or(MSG_LOGIN_FAILED)
                        .to_string(),
                };
            }
        };

        let Some((token, role)) = reply.into_complete() else {
            warn!("Login reply missing token or role");
            return LoginOutcome::Failure {
                message: MSG_INVALID_RESPONSE.to_string(),
            };
        };

        if let Err(err) = self.session.set(&Session::new(token, role.clone())) {
            return LoginOutcome::Failure {
                message: err.to_string(),
            };
        }

        let route = Route::for_role(&role);
        info!(role = %role, route = route.path(), "Login succeeded");
        LoginOutcome::Success { route }
    }

    /// Drop the stored session.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.session.clear()
    }

    /// The store this flow writes to.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }
}

/// The signup flow.
pub struct SignupScreen<A: AuthGateway> {
    auth: A,
}

impl<A: AuthGateway> SignupScreen<A> {
    #[must_use]
    pub fn new(auth: A) -> Self {
        Self { auth }
    }

    /// Attempt a signup.
    ///
    /// All six fields must be non-blank before the network is touched. A
    /// duplicate-username rejection is rewritten into a friendlier message;
    /// any other rejection surfaces the server's text when there is one.
    pub async fn signup(&self, request: &SignupRequest) -> SignupOutcome {
        if request.has_blank_field() {
            return SignupOutcome::Failure {
                message: MSG_MISSING_SIGNUP_FIELDS.to_string(),
            };
        }

        match self.auth.signup(request).await {
            Ok(()) => {
                info!(username = %request.username, "Signup succeeded");
                SignupOutcome::Success {
                    message: MSG_SIGNUP_SUCCESS.to_string(),
                    redirect: Route::Login,
                    redirect_after: SIGNUP_REDIRECT_DELAY,
                }
            }
            Err(err) => {
                warn!(error = %err, "Signup rejected");
                let message = match err.server_message() {
                    Some(server) if server.contains("Username already exists") => {
                        MSG_DUPLICATE_USERNAME.to_string()
                    }
                    Some(server) => server.to_string(),
                    None => MSG_SIGNUP_FAILED.to_string(),
                };
                SignupOutcome::Failure { message }
            }
        }
    }
}
