//! # Collegiate Config
//!
//! Configuration types for the Collegiate client.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`api`]: backend API endpoint configuration
//! - [`storage`]: durable client-side storage locations
//!
//! # Example
//!
//! ```ignore
//! use collegiate_config::{ApiConfig, StorageConfig};
//!
//! // Load all configs from environment
//! let api_config = ApiConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! ```

pub mod api;
pub mod storage;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use storage::StorageConfig;
