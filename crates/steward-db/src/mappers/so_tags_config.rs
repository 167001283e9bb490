//! Stack Overflow tag config model -> entity mappers

use steward_core::entities::{SoTagView, SoTagsConfig};
use steward_core::value_objects::Snowflake;

use crate::models::{SoTagViewModel, SoTagsConfigModel};

impl From<SoTagsConfigModel> for SoTagsConfig {
    fn from(model: SoTagsConfigModel) -> Self {
        SoTagsConfig {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            tag_name: model.tag_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SoTagViewModel> for SoTagView {
    fn from(model: SoTagViewModel) -> Self {
        SoTagView {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            guild_name: model.guild_name,
            tag_name: model.tag_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
