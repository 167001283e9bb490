//! Dashboard connection registry
//!
//! Tracks live dashboard WebSocket connections for logging and
//! shutdown bookkeeping.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Registry of live dashboard connections
#[derive(Default)]
pub struct DashboardRegistry {
    connections: DashMap<Uuid, DateTime<Utc>>,
}

impl DashboardRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Register a new connection and return its id
    pub fn register(&self) -> Uuid {
        let connection_id = Uuid::new_v4();
        self.connections.insert(connection_id, Utc::now());
        connection_id
    }

    /// Remove a connection, returning how long it was open
    pub fn deregister(&self, connection_id: Uuid) -> Option<chrono::Duration> {
        self.connections
            .remove(&connection_id)
            .map(|(_, connected_at)| Utc::now() - connected_at)
    }

    /// Number of live connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

impl std::fmt::Debug for DashboardRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardRegistry")
            .field("connections", &self.connections.len())
            .finish()
    }
}
