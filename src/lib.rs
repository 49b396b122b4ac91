//! ynr - Candidate and Election Data API
//!
//! Library exports for testing and external use.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod serializers;
pub mod state;
pub mod store;
pub mod urls;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;
