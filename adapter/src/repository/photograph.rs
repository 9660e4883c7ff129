use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::PhotographId, photograph::Photograph};
use kernel::repository::photograph::PhotographRepository;
use shared::error::AppResult;

use crate::document::{collection, DocumentStore};

#[derive(new)]
pub struct PhotographRepositoryImpl {
    db: DocumentStore,
}

// 画像バイト列は photographs/{id} のパスで blob ストアに置く
fn blob_path(photograph_id: PhotographId) -> String {
    format!("{}/{}", collection::PHOTOGRAPHS, photograph_id)
}

#[async_trait]
impl PhotographRepository for PhotographRepositoryImpl {
    async fn store(&self, photograph: Photograph) -> AppResult<()> {
        self.db
            .put_blob(&blob_path(photograph.id), photograph.content)
            .await
    }

    async fn find_by_id(&self, photograph_id: PhotographId) -> AppResult<Option<Photograph>> {
        let content = self.db.get_blob(&blob_path(photograph_id)).await?;
        Ok(content.map(|content| Photograph {
            id: photograph_id,
            content,
        }))
    }

    async fn delete(&self, photograph_id: PhotographId) -> AppResult<()> {
        self.db.delete_blob(&blob_path(photograph_id)).await
    }
}
