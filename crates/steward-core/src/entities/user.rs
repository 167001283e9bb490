//! User entity - a chat-platform user known to the service

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A platform user referenced by allowed-user associations
///
/// Identified within the service by `(name, discriminator)`; the
/// discriminator is the four-character numeric suffix the platform
/// displays after the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
    pub discriminator: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, discriminator: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            avatar_url: None,
            discriminator,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the avatar URL
    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }

    /// Display tag in `name#discriminator` form
    pub fn tag(&self) -> String {
        format!("{}#{}", self.name, self.discriminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("alice".to_string(), "0001".to_string());
        assert_eq!(user.name, "alice");
        assert_eq!(user.discriminator, "0001");
        assert!(user.avatar_url.is_none());
    }

    #[test]
    fn test_user_tag() {
        let user = User::new("alice".to_string(), "0001".to_string());
        assert_eq!(user.tag(), "alice#0001");
    }

    #[test]
    fn test_set_avatar_url() {
        let mut user = User::new("bob".to_string(), "0002".to_string());
        user.set_avatar_url(Some("https://cdn.example/avatars/bob.png".to_string()));
        assert!(user.avatar_url.is_some());
    }
}
