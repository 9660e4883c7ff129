use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book::{
        event::{CreateBook, DeleteBook, UpdateBook},
        Book,
    },
    id::{BookId, UserId},
};

#[mockall::automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    // 蔵書を登録する
    async fn create(&self, event: CreateBook) -> AppResult<BookId>;
    // 蔵書レコードを丸ごと上書き保存する（フィールド単位の部分更新はしない）
    async fn store(&self, book: Book) -> AppResult<()>;
    // 見つからない場合はエラーではなく None を返す
    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>>;
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    // 所有者に紐づく蔵書一覧を取得する
    async fn find_by_owner(&self, owner_id: &UserId) -> AppResult<Vec<Book>>;
    // リクエスト元ユーザーに紐づく蔵書一覧を取得する
    async fn find_by_requester(&self, requester_id: &UserId) -> AppResult<Vec<Book>>;
    // 蔵書の書誌情報を更新する
    async fn update(&self, event: UpdateBook) -> AppResult<()>;
    async fn delete(&self, event: DeleteBook) -> AppResult<()>;
}
