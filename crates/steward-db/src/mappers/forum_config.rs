//! Forum config model -> entity mapper

use steward_core::entities::ForumConfig;
use steward_core::value_objects::Snowflake;

use crate::models::ForumConfigModel;
use crate::storage;

impl From<ForumConfigModel> for ForumConfig {
    fn from(model: ForumConfigModel) -> Self {
        ForumConfig {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            help_forum: model.help_forum,
            help_forum_category: model.help_forum_category,
            help_thread_auto_close: model.help_thread_auto_close,
            help_thread_auto_close_days: model.help_thread_auto_close_days,
            help_thread_notify: model.help_thread_notify,
            help_thread_notify_roles: storage::from_array(model.help_thread_notify_roles),
            help_thread_notify_days: model.help_thread_notify_days,
            help_thread_sync: model.help_thread_sync,
            showcase_forum: model.showcase_forum,
            showcase_forum_category: model.showcase_forum_category,
            showcase_thread_auto_close: model.showcase_thread_auto_close,
            showcase_thread_auto_close_days: model.showcase_thread_auto_close_days,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
