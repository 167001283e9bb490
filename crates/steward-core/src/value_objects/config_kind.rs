//! Configuration kind - names the four dependent configuration tables
//!
//! Every configuration repository reports which kind it serves, and every
//! configuration service is pinned to one kind. The pairing is checked by
//! a conformance test so a service can never be wired to a sibling's table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dependent configuration kinds owned by a guild
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKind {
    GitHub,
    Forum,
    SoTags,
    AllowedUsers,
}

impl ConfigKind {
    /// Stable identifier used in error codes and logs
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Forum => "forum",
            Self::SoTags => "so_tags",
            Self::AllowedUsers => "allowed_users",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ConfigKind::GitHub.as_str(), "github");
        assert_eq!(ConfigKind::Forum.as_str(), "forum");
        assert_eq!(ConfigKind::SoTags.as_str(), "so_tags");
        assert_eq!(ConfigKind::AllowedUsers.as_str(), "allowed_users");
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(ConfigKind::Forum, ConfigKind::AllowedUsers);
        assert_ne!(ConfigKind::GitHub, ConfigKind::SoTags);
    }
}
