//! Shared basics for bytekit tools
//!
//! Provides:
//! - layered configuration loading (figment)
//! - logging initialisation (tracing-subscriber)
//! - the common error type

pub mod config;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::{load_config, load_config_from_file};
pub use error::{Error, Result};
pub use logging::{init_logging, LogConfig, LogConfigBuilder, LogFormat};
