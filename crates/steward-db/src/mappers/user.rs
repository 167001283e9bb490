//! User model -> entity mapper

use steward_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            avatar_url: model.avatar_url,
            discriminator: model.discriminator,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
