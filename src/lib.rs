//! # Collegiate
//!
//! The client core of a college-management system: a typed REST client and
//! an interactive admin console for the college API.
//!
//! ## Overview
//!
//! Collegiate covers the administrative workflows of the college front end:
//!
//! - **Authentication**: username/password login, role-based landing
//!   routes, and account signup
//! - **Session**: a durable token + role pair surviving restarts
//! - **Resource management**: list/add/edit/delete screens for students,
//!   faculties, courses, departments, and user accounts
//! - **Pagination**: paging through the faculties collection
//!
//! ## Architecture
//!
//! The workspace splits by concern:
//!
//! ```text
//! crates/
//! ├── collegiate-core/      # Pagination and shared foundation types
//! ├── collegiate-config/    # Environment-driven configuration
//! ├── collegiate-models/    # Entities, drafts, auth payloads, roles
//! ├── collegiate-session/   # The durable session store
//! └── collegiate-client/    # HTTP layer: authorizer, auth calls, resources
//! src/
//! ├── console/              # The interactive admin console (clap + dialoguer)
//! ├── screens/              # Screen controllers: auth flow + generic CRUD
//! └── logging.rs            # Console tracing setup
//! ```
//!
//! Control flows downward only: a screen drives its resource gateway, the
//! gateway drives the HTTP layer, and the authorizer decorates each request
//! with the stored bearer token. The auth flow is the sole writer of the
//! session store.
//!
//! ## Quick start
//!
//! ```bash
//! export COLLEGIATE_API_URL=http://localhost:8080
//! collegiate login
//! collegiate students list
//! collegiate faculties list --page 2
//! ```
//!
//! ## Modules
//!
//! - [`console`]: command definitions and interactive forms
//! - [`logging`]: tracing subscriber setup
//! - [`screens`]: the auth flow and the generic CRUD screen controller

pub mod console;
pub mod logging;
pub mod screens;

// Re-export workspace crates for convenience
pub use collegiate_client;
pub use collegiate_config;
pub use collegiate_core;
pub use collegiate_models;
pub use collegiate_session;
