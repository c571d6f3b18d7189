//! Spark Core - Foundation types shared by the Spark REST client crates.
//!
//! This crate provides:
//! - Client configuration (access token, user agent, API base URL)
//! - A single error type covering validation, transport and API failures
//! - Structured logging with tracing
//! - Platform directories and common constants

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::{ApiConfig, AppConfig};
pub use error::{SparkError, SparkResult};
pub use logging::{init_console_logging, init_logging};
