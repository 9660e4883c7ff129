use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{BookId, RequestId, UserId},
    request::{event::CreateRequest, Request},
};

#[mockall::automock]
#[async_trait]
pub trait RequestRepository: Send + Sync {
    // 借用リクエストを作成する
    async fn create(&self, event: CreateRequest) -> AppResult<RequestId>;
    // リクエストレコードを丸ごと上書き保存する
    async fn store(&self, request: Request) -> AppResult<()>;
    async fn find_by_id(&self, request_id: RequestId) -> AppResult<Option<Request>>;
    // 蔵書に紐づくリクエスト一覧を取得する
    async fn find_by_book_id(&self, book_id: BookId) -> AppResult<Vec<Request>>;
    // リクエスト元ユーザーに紐づくリクエスト一覧を取得する
    async fn find_by_requester(&self, requester_id: &UserId) -> AppResult<Vec<Request>>;
    // 返却完了時にリクエストを削除する
    async fn delete(&self, request_id: RequestId) -> AppResult<()>;
}
