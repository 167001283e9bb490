//! Bot-liveness sources
//!
//! Implementations of the `BotLiveness` port. There is no live channel to
//! the companion bot process yet, so production wiring uses
//! [`StubBotLiveness`], which reports offline until a real integration
//! replaces it. [`StaticBotLiveness`] is a settable source for tests and
//! local wiring.

use async_trait::async_trait;
use parking_lot::RwLock;

use steward_core::{BotLiveness, ServiceStatus};

/// Liveness source that always reports the bot as offline
///
/// Stands in for the unbuilt bot integration.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubBotLiveness;

#[async_trait]
impl BotLiveness for StubBotLiveness {
    async fn status(&self) -> ServiceStatus {
        ServiceStatus::Offline
    }
}

/// Liveness source holding a settable in-memory status
#[derive(Debug)]
pub struct StaticBotLiveness {
    status: RwLock<ServiceStatus>,
}

impl StaticBotLiveness {
    /// Create a source reporting the given status
    pub fn new(status: ServiceStatus) -> Self {
        Self {
            status: RwLock::new(status),
        }
    }

    /// Replace the reported status
    pub fn set(&self, status: ServiceStatus) {
        *self.status.write() = status;
    }
}

#[async_trait]
impl BotLiveness for StaticBotLiveness {
    async fn status(&self) -> ServiceStatus {
        *self.status.read()
    }
}
