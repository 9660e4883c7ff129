use async_trait::async_trait;
use derive_new::new;
use kernel::model::book::{
    event::{CreateBook, DeleteBook, UpdateBook},
    Book, BookStatus,
};
use kernel::model::id::{BookId, UserId};
use kernel::repository::book::BookRepository;
use serde_json::Value;
use shared::error::{AppError, AppResult};

use crate::document::model::book::{BookDocument, FIELD_OWNER_ID};
use crate::document::model::request::{RequestDocument, FIELD_REQUESTER_ID};
use crate::document::model::{from_document, to_document};
use crate::document::{collection, Document, DocumentStore};

#[derive(new)]
pub struct BookRepositoryImpl {
    db: DocumentStore,
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create(&self, event: CreateBook) -> AppResult<BookId> {
        let book_id = BookId::new();
        let CreateBook {
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
        } = event;
        // 登録直後の蔵書は AVAILABLE
        let document = to_document(&BookDocument {
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
            status: BookStatus::Available,
        })?;
        self.db
            .upsert(collection::BOOKS, &book_id.to_string(), document)
            .await?;
        Ok(book_id)
    }

    async fn store(&self, book: Book) -> AppResult<()> {
        let id = book.id.to_string();
        let document = to_document(&BookDocument::from(book))?;
        self.db.upsert(collection::BOOKS, &id, document).await
    }

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>> {
        let Some(document) = self
            .db
            .find_by_id(collection::BOOKS, &book_id.to_string())
            .await?
        else {
            return Ok(None);
        };
        let document: BookDocument = from_document(document)?;
        Ok(Some(document.into_book(book_id)))
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        self.db
            .find_all(collection::BOOKS)
            .await?
            .into_iter()
            .map(row_into_book)
            .collect()
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> AppResult<Vec<Book>> {
        self.db
            .find_where(
                collection::BOOKS,
                FIELD_OWNER_ID,
                &Value::String(owner_id.to_string()),
            )
            .await?
            .into_iter()
            .map(row_into_book)
            .collect()
    }

    // リクエスト一覧から蔵書 ID を集め、その ID を持つ蔵書だけを残す
    async fn find_by_requester(&self, requester_id: &UserId) -> AppResult<Vec<Book>> {
        let requests = self
            .db
            .find_where(
                collection::REQUESTS,
                FIELD_REQUESTER_ID,
                &Value::String(requester_id.to_string()),
            )
            .await?;

        let mut book_ids = Vec::new();
        for (_, document) in requests {
            let request: RequestDocument = from_document(document)?;
            book_ids.push(request.book_id);
        }

        let books = self.find_all().await?;
        Ok(books
            .into_iter()
            .filter(|book| book_ids.contains(&book.id))
            .collect())
    }

    async fn update(&self, event: UpdateBook) -> AppResult<()> {
        // レコード全体を読み出し、書き換えて丸ごと上書きする
        let book = self.find_by_id(event.book_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("蔵書（{}）が見つかりませんでした。", event.book_id))
        })?;
        let UpdateBook {
            book_id: _,
            title,
            author,
            isbn,
            description,
            photograph,
        } = event;
        self.store(Book {
            title,
            author,
            isbn,
            description,
            photograph,
            ..book
        })
        .await
    }

    async fn delete(&self, event: DeleteBook) -> AppResult<()> {
        let book = self.find_by_id(event.book_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("蔵書（{}）が見つかりませんでした。", event.book_id))
        })?;
        // 所有者以外は削除できない
        if book.owner_id != event.requested_user {
            return Err(AppError::UnprocessableEntity(
                "蔵書の所有者のみが削除できます。".into(),
            ));
        }
        self.db
            .delete(collection::BOOKS, &event.book_id.to_string())
            .await
    }
}

fn row_into_book((id, document): (String, Document)) -> AppResult<Book> {
    let book_id: BookId = id.parse()?;
    let document: BookDocument = from_document(document)?;
    Ok(document.into_book(book_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::request::RequestRepositoryImpl;
    use kernel::model::request::event::CreateRequest;
    use kernel::repository::request::RequestRepository;

    fn create_book_event(owner: &str, title: &str) -> CreateBook {
        CreateBook {
            owner_id: UserId::new(owner),
            title: title.into(),
            author: "Steve McConnell".into(),
            isbn: "0-7356-1976-0".into(),
            description: "Test Description".into(),
            photograph: None,
        }
    }

    #[tokio::test]
    async fn test_register_book() -> anyhow::Result<()> {
        let repo = BookRepositoryImpl::new(DocumentStore::new());

        let book_id = repo
            .create(create_book_event("john.smith42", "Code Complete 2"))
            .await?;

        let res = repo.find_all().await?;
        assert_eq!(res.len(), 1);

        let res = repo.find_by_id(book_id).await?;
        assert!(res.is_some());

        let Book {
            id,
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
            status,
        } = res.unwrap();
        assert_eq!(id, book_id);
        assert_eq!(owner_id, UserId::new("john.smith42"));
        assert_eq!(title, "Code Complete 2");
        assert_eq!(author, "Steve McConnell");
        assert_eq!(isbn, "0-7356-1976-0");
        assert_eq!(description, "Test Description");
        assert_eq!(photograph, None);
        assert_eq!(status, BookStatus::Available);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_owner() -> anyhow::Result<()> {
        let repo = BookRepositoryImpl::new(DocumentStore::new());

        repo.create(create_book_event("john.smith42", "Code Complete 2"))
            .await?;
        repo.create(create_book_event("mary.jane9", "Programming Pearls"))
            .await?;

        let res = repo.find_by_owner(&UserId::new("john.smith42")).await?;
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].title, "Code Complete 2");
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_requester() -> anyhow::Result<()> {
        let store = DocumentStore::new();
        let book_repo = BookRepositoryImpl::new(store.clone());
        let request_repo = RequestRepositoryImpl::new(store);

        let requested_id = book_repo
            .create(create_book_event("john.smith42", "Code Complete 2"))
            .await?;
        book_repo
            .create(create_book_event("john.smith42", "Programming Pearls"))
            .await?;

        let requester = UserId::new("mary.jane9");
        request_repo
            .create(CreateRequest::new(requested_id, requester.clone()))
            .await?;

        let res = book_repo.find_by_requester(&requester).await?;
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, requested_id);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_overwrites_whole_record() -> anyhow::Result<()> {
        let repo = BookRepositoryImpl::new(DocumentStore::new());

        let book_id = repo
            .create(create_book_event("john.smith42", "Unedited Title"))
            .await?;

        repo.update(UpdateBook {
            book_id,
            title: "Edited Title".into(),
            author: "Edited Author".into(),
            isbn: "978-0-201-65788-3".into(),
            description: "Edited Description".into(),
            photograph: None,
        })
        .await?;

        let book = repo.find_by_id(book_id).await?.unwrap();
        assert_eq!(book.title, "Edited Title");
        assert_eq!(book.isbn, "978-0-201-65788-3");
        // ステータスは書誌情報の更新では変わらない
        assert_eq!(book.status, BookStatus::Available);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_rejects_non_owner() -> anyhow::Result<()> {
        let repo = BookRepositoryImpl::new(DocumentStore::new());

        let book_id = repo
            .create(create_book_event("john.smith42", "Code Complete 2"))
            .await?;

        let res = repo
            .delete(DeleteBook {
                book_id,
                requested_user: UserId::new("mary.jane9"),
            })
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        repo.delete(DeleteBook {
            book_id,
            requested_user: UserId::new("john.smith42"),
        })
        .await?;
        assert!(repo.find_by_id(book_id).await?.is_none());
        Ok(())
    }
}
