use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use shared::error::AppResult;
use tokio::sync::RwLock;

pub mod model;

// ストレージ上のレコードはフィールド名から値へのフラットな写像
pub type Document = serde_json::Map<String, Value>;

pub mod collection {
    pub const USERS: &str = "users";
    pub const BOOKS: &str = "books";
    pub const REQUESTS: &str = "requests";
    pub const PHOTOGRAPHS: &str = "photographs";
}

// コレクションごとに挿入順を保った (ID, ドキュメント) の列
type Collections = HashMap<String, Vec<(String, Document)>>;

/// アプリ全体で共有するインメモリのドキュメントストア。
///
/// すべての操作は一度だけ成功または失敗する非同期呼び出しで、
/// 書き込みは ID 単位の create-or-replace（last-write-wins）。
/// バージョン検査や書き込み同士の調停は行わない。
#[derive(Clone, Default)]
pub struct DocumentStore {
    collections: Arc<RwLock<Collections>>,
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ID をキーにした create-or-replace
    pub async fn upsert(&self, collection: &str, id: &str, document: Document) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(collection.to_string()).or_default();
        match records
            .iter_mut()
            .find(|(record_id, _)| record_id.as_str() == id)
        {
            Some((_, existing)) => *existing = document,
            None => records.push((id.to_string(), document)),
        }
        tracing::debug!(collection, id, "stored document");
        Ok(())
    }

    // 見つからない場合は成功扱いで None を返す
    pub async fn find_by_id(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        let found = collections
            .get(collection)
            .and_then(|records| {
                records
                    .iter()
                    .find(|(record_id, _)| record_id.as_str() == id)
            })
            .map(|(_, document)| document.clone());
        if found.is_none() {
            tracing::debug!(collection, id, "no document with this id exists");
        }
        Ok(found)
    }

    // 挿入順のままコレクション全体を返す
    pub async fn find_all(&self, collection: &str) -> AppResult<Vec<(String, Document)>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    // 単一フィールドの等価比較のみをサポートする
    pub async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> AppResult<Vec<(String, Document)>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|(_, document)| document.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    // 存在しない ID の削除も成功として扱う
    pub async fn delete(&self, collection: &str, id: &str) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(records) = collections.get_mut(collection) {
            records.retain(|(record_id, _)| record_id.as_str() != id);
        }
        tracing::debug!(collection, id, "deleted document");
        Ok(())
    }

    pub async fn put_blob(&self, path: &str, content: Vec<u8>) -> AppResult<()> {
        self.blobs.write().await.insert(path.to_string(), content);
        tracing::debug!(path, "stored blob");
        Ok(())
    }

    // 保存されていない blob は成功扱いの None
    pub async fn get_blob(&self, path: &str) -> AppResult<Option<Vec<u8>>> {
        Ok(self.blobs.read().await.get(path).cloned())
    }

    pub async fn delete_blob(&self, path: &str) -> AppResult<()> {
        self.blobs.write().await.remove(path);
        tracing::debug!(path, "deleted blob");
        Ok(())
    }

    pub async fn ping(&self) -> bool {
        // 読み取りロックが取得できればストアは応答可能
        let _ = self.collections.read().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(fields: &[(&str, &str)]) -> Document {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[tokio::test]
    async fn test_upsert_and_find() -> anyhow::Result<()> {
        let store = DocumentStore::new();
        store
            .upsert(collection::BOOKS, "b1", document(&[("title", "Code Complete 2")]))
            .await?;

        let found = store.find_by_id(collection::BOOKS, "b1").await?;
        assert_eq!(found.unwrap()["title"], json!("Code Complete 2"));

        let missing = store.find_by_id(collection::BOOKS, "b2").await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_is_last_write_wins() -> anyhow::Result<()> {
        let store = DocumentStore::new();
        store
            .upsert(collection::BOOKS, "b1", document(&[("title", "first")]))
            .await?;
        store
            .upsert(collection::BOOKS, "b1", document(&[("title", "second")]))
            .await?;

        let all = store.find_all(collection::BOOKS).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].1["title"], json!("second"));
        Ok(())
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() -> anyhow::Result<()> {
        let store = DocumentStore::new();
        for id in ["b1", "b2", "b3"] {
            store
                .upsert(collection::BOOKS, id, document(&[("title", id)]))
                .await?;
        }
        // 上書きしても位置は変わらない
        store
            .upsert(collection::BOOKS, "b2", document(&[("title", "rewritten")]))
            .await?;

        let ids: Vec<String> = store
            .find_all(collection::BOOKS)
            .await?
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_where_matches_on_equality() -> anyhow::Result<()> {
        let store = DocumentStore::new();
        store
            .upsert(collection::REQUESTS, "r1", document(&[("bookId", "b1")]))
            .await?;
        store
            .upsert(collection::REQUESTS, "r2", document(&[("bookId", "b2")]))
            .await?;

        let matched = store
            .find_where(collection::REQUESTS, "bookId", &json!("b1"))
            .await?;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].0, "r1");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() -> anyhow::Result<()> {
        let store = DocumentStore::new();
        store
            .upsert(collection::REQUESTS, "r1", document(&[("bookId", "b1")]))
            .await?;
        store.delete(collection::REQUESTS, "r1").await?;
        store.delete(collection::REQUESTS, "r1").await?;
        assert!(store.find_all(collection::REQUESTS).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_blob_is_not_an_error() -> anyhow::Result<()> {
        let store = DocumentStore::new();
        let blob = store.get_blob("photographs/never-stored").await?;
        assert!(blob.is_none());

        store.put_blob("photographs/p1", vec![0x1, 0x2]).await?;
        assert_eq!(store.get_blob("photographs/p1").await?, Some(vec![0x1, 0x2]));

        store.delete_blob("photographs/p1").await?;
        assert!(store.get_blob("photographs/p1").await?.is_none());
        Ok(())
    }
}
