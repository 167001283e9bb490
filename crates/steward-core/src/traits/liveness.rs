//! Bot liveness port - reachability of the companion bot process
//!
//! The dashboard and the health aggregator both want to know whether the
//! automation bot is up. There is no live channel to the bot yet, so the
//! production wiring uses a stub implementation that reports offline; the
//! port keeps that decision out of the callers.

use async_trait::async_trait;

use crate::value_objects::ServiceStatus;

/// Source of the bot process's reachability status
#[async_trait]
pub trait BotLiveness: Send + Sync {
    /// Current status of the bot process
    async fn status(&self) -> ServiceStatus;

    /// Simplified online/offline flag used by the dashboard feed
    async fn is_online(&self) -> bool {
        self.status().await.is_online()
    }
}
