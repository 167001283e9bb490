//! Allowed-user config model -> entity mappers

use steward_core::entities::{AllowedUserView, AllowedUsersConfig};
use steward_core::value_objects::Snowflake;

use crate::models::{AllowedUserViewModel, AllowedUsersConfigModel};

impl From<AllowedUsersConfigModel> for AllowedUsersConfig {
    fn from(model: AllowedUsersConfigModel) -> Self {
        AllowedUsersConfig {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AllowedUserViewModel> for AllowedUserView {
    fn from(model: AllowedUserViewModel) -> Self {
        AllowedUserView {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            user_id: model.user_id,
            user_name: model.user_name,
            discriminator: model.discriminator,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
