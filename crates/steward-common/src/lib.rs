//! # steward-common
//!
//! Shared utilities including configuration, error handling, the process
//! clock, and telemetry.

pub mod clock;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use clock::ProcessClock;
pub use config::{
    AppConfig, AppSettings, ConfigError, DashboardConfig, DatabaseConfig, Environment,
    ServerConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
