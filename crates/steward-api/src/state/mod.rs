//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration and dashboard plumbing.

mod registry;

pub use registry::DashboardRegistry;

use std::sync::Arc;
use std::time::Duration;

use steward_common::{AppConfig, ProcessClock};
use steward_service::services::ServiceContext;
use tokio::sync::watch;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Process start reference for uptime reporting
    clock: ProcessClock,
    /// Flag flipped once when the server begins shutting down
    shutdown: Arc<watch::Sender<bool>>,
    /// Live dashboard connections
    dashboard_connections: Arc<DashboardRegistry>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, clock: ProcessClock) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            clock,
            shutdown: Arc::new(shutdown),
            dashboard_connections: Arc::new(DashboardRegistry::new()),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the process start reference
    pub fn clock(&self) -> ProcessClock {
        self.clock
    }

    /// Subscribe to the shutdown flag
    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown.subscribe()
    }

    /// Flip the shutdown flag for every subscribed dashboard stream
    pub fn trigger_shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    /// Dashboard broadcast cadence from configuration
    pub fn dashboard_interval(&self) -> Duration {
        Duration::from_secs(self.config.dashboard.interval_secs)
    }

    /// Get the dashboard connection registry
    pub fn dashboard_connections(&self) -> &DashboardRegistry {
        &self.dashboard_connections
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("dashboard_connections", &self.dashboard_connections.connection_count())
            .finish()
    }
}
