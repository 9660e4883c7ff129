use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::UserId, user::User};

#[mockall::automock]
#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザー名をキーとした create-or-replace
    async fn store(&self, user: User) -> AppResult<()>;
    async fn find_by_username(&self, username: &UserId) -> AppResult<Option<User>>;
}
