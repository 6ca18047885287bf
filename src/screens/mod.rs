//! Screen controllers.
//!
//! A screen owns the state the original front end kept per page: the
//! committed list snapshot, the working form draft, and the last surfaced
//! error. Screens drive gateways; they never touch the HTTP layer directly,
//! which is what lets the tests run them against in-memory fakes.
//!
//! - [`auth`]: the login and signup flows
//! - [`crud`]: the generic list/add/edit/delete state machine

pub mod auth;
pub mod crud;

pub use auth::{LoginOutcome, LoginScreen, SignupOutcome, SignupScreen};
pub use crud::{CrudScreen, FormMode, ScreenState};
