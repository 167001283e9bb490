//! Service status - tri-state health value for probed subsystems
//!
//! Each health probe resolves to one of these states; the overall system
//! status is the pessimistic reduction over all probe results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health state of a probed subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Degraded,
    Offline,
}

impl ServiceStatus {
    /// Reduce a set of probe results to one overall status.
    ///
    /// All probes offline means the system is down; any single offline or
    /// degraded probe degrades the whole; otherwise the system is online.
    pub fn reduce(statuses: &[ServiceStatus]) -> ServiceStatus {
        if !statuses.is_empty() && statuses.iter().all(|s| *s == Self::Offline) {
            Self::Offline
        } else if statuses
            .iter()
            .any(|s| matches!(s, Self::Offline | Self::Degraded))
        {
            Self::Degraded
        } else {
            Self::Online
        }
    }

    /// HTTP status code reported for this state
    #[inline]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Online => 200,
            Self::Degraded => 503,
            Self::Offline => 500,
        }
    }

    /// Lowercase wire representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Degraded => "degraded",
            Self::Offline => "offline",
        }
    }

    #[inline]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
