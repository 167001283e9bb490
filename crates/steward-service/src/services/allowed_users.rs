//! Allowed-users service
//!
//! Manages which users hold elevated bot access in a guild. Users are
//! resolved by `(name, discriminator)` and created on first sight; the
//! association row is then upserted against the guild.

use tracing::{info, instrument};
use uuid::Uuid;

use steward_core::{AllowedUsersConfig, ConfigKind, DomainError, Snowflake, User};

use crate::dto::{AllowedUserResponse, AllowedUserWithProfile, UpsertAllowedUserRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Allowed-users service
pub struct AllowedUsersService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AllowedUsersService<'a> {
    /// Configuration kind this service is declared to serve
    pub const KIND: ConfigKind = ConfigKind::AllowedUsers;

    /// Create a new AllowedUsersService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Kind reported by the repository this service is wired to
    pub fn kind(&self) -> ConfigKind {
        self.ctx.allowed_users_repo().kind()
    }

    /// All allowed users for the guild, joined with profile fields
    ///
    /// A guild with nothing configured reads as not-found, matching the
    /// single-row config kinds.
    #[instrument(skip(self))]
    pub async fn get_users(&self, guild_id: Snowflake) -> ServiceResult<Vec<AllowedUserResponse>> {
        let rows = self
            .ctx
            .allowed_users_repo()
            .find_by_guild_id(guild_id)
            .await?;
        if rows.is_empty() {
            return Err(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            }
            .into());
        }

        Ok(rows.iter().map(AllowedUserResponse::from).collect())
    }

    /// Grant a user access in the guild, or refresh the existing grant
    ///
    /// Resolves the user by `(name, discriminator)`, creating the row on
    /// first sight and refreshing a stale avatar on later sightings, then
    /// upserts the `(guild, user)` association.
    #[instrument(skip(self, request))]
    pub async fn allow_user(
        &self,
        guild_id: Snowflake,
        request: UpsertAllowedUserRequest,
    ) -> ServiceResult<AllowedUserResponse> {
        let user = self
            .resolve_user(&request.name, &request.discriminator, request.avatar_url)
            .await?;

        let entry = AllowedUsersConfig::new(guild_id, user.id);
        let stored = self.ctx.allowed_users_repo().upsert(&entry).await?;

        info!(guild_id = %guild_id, user = %user.tag(), "User allowed");

        Ok(AllowedUserResponse::from(AllowedUserWithProfile {
            entry: stored,
            user,
        }))
    }

    /// Revoke a user's access in the guild
    #[instrument(skip(self))]
    pub async fn disallow_user(&self, guild_id: Snowflake, user_id: Uuid) -> ServiceResult<()> {
        let rows = self
            .ctx
            .allowed_users_repo()
            .find_by_guild_id(guild_id)
            .await?;
        let row = rows
            .iter()
            .find(|row| row.user_id == user_id)
            .ok_or(DomainError::ConfigNotFound {
                kind: Self::KIND,
                guild_id,
            })?;

        self.ctx.allowed_users_repo().delete(row.id).await?;

        info!(guild_id = %guild_id, user_id = %user_id, "User disallowed");

        Ok(())
    }

    /// Find the user by tag, creating or refreshing the row as needed
    async fn resolve_user(
        &self,
        name: &str,
        discriminator: &str,
        avatar_url: Option<String>,
    ) -> ServiceResult<User> {
        match self
            .ctx
            .user_repo()
            .find_by_tag(name, discriminator)
            .await?
        {
            Some(mut user) => {
                if avatar_url.is_some() && user.avatar_url != avatar_url {
                    user.set_avatar_url(avatar_url);
                    self.ctx.user_repo().update(&user).await?;
                }
                Ok(user)
            }
            None => {
                let mut user = User::new(name.to_string(), discriminator.to_string());
                user.avatar_url = avatar_url;
                self.ctx.user_repo().create(&user).await?;

                info!(user = %user.tag(), "User created");

                Ok(user)
            }
        }
    }
}
