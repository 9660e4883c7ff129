use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::{BookId, RequestId, UserId};
use kernel::model::request::{event::CreateRequest, Request, RequestStatus};
use kernel::repository::request::RequestRepository;
use serde_json::Value;
use shared::error::AppResult;

use crate::document::model::request::{RequestDocument, FIELD_BOOK_ID, FIELD_REQUESTER_ID};
use crate::document::model::{from_document, to_document};
use crate::document::{collection, Document, DocumentStore};

#[derive(new)]
pub struct RequestRepositoryImpl {
    db: DocumentStore,
}

#[async_trait]
impl RequestRepository for RequestRepositoryImpl {
    async fn create(&self, event: CreateRequest) -> AppResult<RequestId> {
        let request_id = RequestId::new();
        let CreateRequest {
            book_id,
            requester_id,
        } = event;
        // 作成直後は REQUESTED・受け渡し場所なし
        let document = to_document(&RequestDocument {
            book_id,
            requester_id,
            location: None,
            status: RequestStatus::Requested,
        })?;
        self.db
            .upsert(collection::REQUESTS, &request_id.to_string(), document)
            .await?;
        Ok(request_id)
    }

    async fn store(&self, request: Request) -> AppResult<()> {
        let id = request.id.to_string();
        let document = to_document(&RequestDocument::from(request))?;
        self.db.upsert(collection::REQUESTS, &id, document).await
    }

    async fn find_by_id(&self, request_id: RequestId) -> AppResult<Option<Request>> {
        let Some(document) = self
            .db
            .find_by_id(collection::REQUESTS, &request_id.to_string())
            .await?
        else {
            return Ok(None);
        };
        let document: RequestDocument = from_document(document)?;
        Ok(Some(document.into_request(request_id)))
    }

    async fn find_by_book_id(&self, book_id: BookId) -> AppResult<Vec<Request>> {
        self.db
            .find_where(
                collection::REQUESTS,
                FIELD_BOOK_ID,
                &Value::String(book_id.to_string()),
            )
            .await?
            .into_iter()
            .map(row_into_request)
            .collect()
    }

    async fn find_by_requester(&self, requester_id: &UserId) -> AppResult<Vec<Request>> {
        self.db
            .find_where(
                collection::REQUESTS,
                FIELD_REQUESTER_ID,
                &Value::String(requester_id.to_string()),
            )
            .await?
            .into_iter()
            .map(row_into_request)
            .collect()
    }

    async fn delete(&self, request_id: RequestId) -> AppResult<()> {
        self.db
            .delete(collection::REQUESTS, &request_id.to_string())
            .await
    }
}

fn row_into_request((id, document): (String, Document)) -> AppResult<Request> {
    let request_id: RequestId = id.parse()?;
    let document: RequestDocument = from_document(document)?;
    Ok(document.into_request(request_id))
}
