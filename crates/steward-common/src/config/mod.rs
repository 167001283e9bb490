//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DashboardConfig, DatabaseConfig, Environment,
    ServerConfig,
};
