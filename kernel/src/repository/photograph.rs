use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::PhotographId, photograph::Photograph};

#[mockall::automock]
#[async_trait]
pub trait PhotographRepository: Send + Sync {
    async fn store(&self, photograph: Photograph) -> AppResult<()>;
    // 保存されていない ID は成功経路の None として返す
    async fn find_by_id(&self, photograph_id: PhotographId) -> AppResult<Option<Photograph>>;
    async fn delete(&self, photograph_id: PhotographId) -> AppResult<()>;
}
