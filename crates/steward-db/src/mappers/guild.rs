//! Guild model -> entity mapper

use steward_core::entities::Guild;
use steward_core::value_objects::Snowflake;

use crate::models::GuildModel;

impl From<GuildModel> for Guild {
    fn from(model: GuildModel) -> Self {
        Guild {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            guild_name: model.guild_name,
            prefix: model.prefix,
            help_channel_id: model.help_channel_id.map(Snowflake::new),
            showcase_channel_id: model.showcase_channel_id.map(Snowflake::new),
            sync_label: model.sync_label,
            issue_linking: model.issue_linking,
            comment_linking: model.comment_linking,
            doc_linking: model.doc_linking,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
