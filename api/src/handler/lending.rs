use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::book::{Book, BookStatus};
use kernel::model::geolocation::Geolocation;
use kernel::model::id::{BookId, RequestId, UserId};
use kernel::model::request::{event::CreateRequest, Request, RequestStatus};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::request::{
    AcceptRequestRequest, ConfirmScanRequest, CreateRequestRequest, RequestCreatedResponse,
    RequestsResponse,
};

// 借用希望者が蔵書にリクエストを登録する。
// 蔵書が AVAILABLE か REQUESTED のときのみ受け付ける
pub async fn request_book(
    Path(book_id): Path<BookId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRequestRequest>,
) -> AppResult<(StatusCode, Json<RequestCreatedResponse>)> {
    req.validate(&())?;

    let mut book = find_book(&registry, book_id).await?;
    if !matches!(book.status, BookStatus::Available | BookStatus::Requested) {
        return Err(AppError::UnprocessableEntity(format!(
            "蔵書（{book_id}）は現在リクエストできません。"
        )));
    }

    let create_request = CreateRequest::new(book_id, UserId::new(req.requester_id));
    let request_id = registry.request_repository().create(create_request).await?;

    // 蔵書側のステータスも REQUESTED へ揃える（2 つの書き込みは独立）
    book.status = BookStatus::Requested;
    registry.book_repository().store(book).await?;

    Ok((
        StatusCode::CREATED,
        Json(RequestCreatedResponse { id: request_id }),
    ))
}

pub async fn show_request_list(
    Path(book_id): Path<BookId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RequestsResponse>> {
    registry
        .request_repository()
        .find_by_book_id(book_id)
        .await
        .map(RequestsResponse::from)
        .map(Json)
}

// 所有者が受け渡し場所を指定してリクエストを承認する。
// 双方が REQUESTED のときのみ成功するため、1 冊の蔵書に対して
// 進行中のリクエストは常に 1 件以下に保たれる
pub async fn accept_request(
    Path((book_id, request_id)): Path<(BookId, RequestId)>,
    State(registry): State<AppRegistry>,
    Json(req): Json<AcceptRequestRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let mut book = find_book(&registry, book_id).await?;
    let mut request = find_request(&registry, request_id).await?;
    verify_request_belongs_to_book(&request, book_id)?;
    if book.status != BookStatus::Requested || request.status != RequestStatus::Requested {
        return Err(AppError::UnprocessableEntity(
            "リクエスト中の蔵書のみ承認できます。".into(),
        ));
    }

    request.location = Some(Geolocation {
        latitude: req.latitude,
        longitude: req.longitude,
    });
    request.status = RequestStatus::Accepted;
    registry.request_repository().store(request).await?;

    book.status = BookStatus::Accepted;
    registry.book_repository().store(book).await?;

    Ok(StatusCode::OK)
}

// 受け渡し時に借用希望者がスキャンした ISBN を検証し、受け取りを確定する。
// ISBN が一致しない場合はどちらのレコードも変更しない
pub async fn confirm_pickup(
    Path((book_id, request_id)): Path<(BookId, RequestId)>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ConfirmScanRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let mut book = find_book(&registry, book_id).await?;
    let mut request = find_request(&registry, request_id).await?;
    verify_request_belongs_to_book(&request, book_id)?;
    if book.status != BookStatus::Accepted || request.status != RequestStatus::Accepted {
        return Err(AppError::UnprocessableEntity(
            "承認済みのリクエストのみ受け取りを確定できます。".into(),
        ));
    }
    book.verify_isbn(&req.isbn)?;

    request.status = RequestStatus::Borrowed;
    registry.request_repository().store(request).await?;

    book.status = BookStatus::Borrowed;
    registry.book_repository().store(book).await?;

    Ok(StatusCode::OK)
}

// 返却時に所有者がスキャンした ISBN を検証し、リクエストを削除して
// 蔵書を AVAILABLE に戻す。削除と上書きは独立した 2 つの書き込みで、
// 片方が失敗してももう片方は取り消さない
pub async fn confirm_return(
    Path(book_id): Path<BookId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ConfirmScanRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let mut book = find_book(&registry, book_id).await?;
    if book.status != BookStatus::Borrowed {
        return Err(AppError::UnprocessableEntity(
            "貸出中の蔵書のみ返却できます。".into(),
        ));
    }
    book.verify_isbn(&req.isbn)?;

    let requests = registry
        .request_repository()
        .find_by_book_id(book_id)
        .await?;
    let borrowed = requests
        .into_iter()
        .find(|request| request.status == RequestStatus::Borrowed)
        .ok_or_else(|| {
            AppError::EntityNotFound("貸出中のリクエストが見つかりませんでした。".into())
        })?;

    registry.request_repository().delete(borrowed.id).await?;

    book.status = BookStatus::Available;
    registry.book_repository().store(book).await?;

    Ok(StatusCode::OK)
}

async fn find_book(registry: &AppRegistry, book_id: BookId) -> AppResult<Book> {
    registry
        .book_repository()
        .find_by_id(book_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("蔵書（{book_id}）が見つかりませんでした。")))
}

async fn find_request(registry: &AppRegistry, request_id: RequestId) -> AppResult<Request> {
    registry
        .request_repository()
        .find_by_id(request_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("リクエスト（{request_id}）が見つかりませんでした。"))
        })
}

fn verify_request_belongs_to_book(request: &Request, book_id: BookId) -> AppResult<()> {
    if request.book_id != book_id {
        return Err(AppError::UnprocessableEntity(
            "リクエストは指定された蔵書のものではありません。".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::document::DocumentStore;
    use kernel::model::book::event::CreateBook;

    fn registry() -> AppRegistry {
        AppRegistry::new(DocumentStore::new())
    }

    async fn register_book(registry: &AppRegistry) -> AppResult<BookId> {
        registry
            .book_repository()
            .create(CreateBook::new(
                UserId::new("john.smith42"),
                "Code Complete 2".into(),
                "Steve McConnell".into(),
                "0-7356-1976-0".into(),
                "A practical handbook of software construction".into(),
                None,
            ))
            .await
    }

    async fn fetch_book(registry: &AppRegistry, book_id: BookId) -> AppResult<Book> {
        find_book(registry, book_id).await
    }

    #[tokio::test]
    async fn test_full_lending_lifecycle() -> anyhow::Result<()> {
        let registry = registry();
        let book_id = register_book(&registry).await?;

        // 借用リクエストの登録
        let (status, Json(created)) = request_book(
            Path(book_id),
            State(registry.clone()),
            Json(CreateRequestRequest {
                requester_id: "mary.jane9".into(),
            }),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
        let request_id = created.id;

        let book = fetch_book(&registry, book_id).await?;
        assert_eq!(book.status, BookStatus::Requested);
        let request = find_request(&registry, request_id).await?;
        assert_eq!(request.status, RequestStatus::Requested);
        assert_eq!(request.location, None);

        // 所有者が受け渡し場所を指定して承認
        let status = accept_request(
            Path((book_id, request_id)),
            State(registry.clone()),
            Json(AcceptRequestRequest {
                latitude: 53.5461,
                longitude: -113.4938,
            }),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);

        let book = fetch_book(&registry, book_id).await?;
        assert_eq!(book.status, BookStatus::Accepted);
        let request = find_request(&registry, request_id).await?;
        assert_eq!(request.status, RequestStatus::Accepted);
        assert_eq!(
            request.location,
            Some(Geolocation {
                latitude: 53.5461,
                longitude: -113.4938,
            })
        );

        // ISBN スキャンで受け取りを確定
        let status = confirm_pickup(
            Path((book_id, request_id)),
            State(registry.clone()),
            Json(ConfirmScanRequest {
                isbn: "0-7356-1976-0".into(),
            }),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);

        let book = fetch_book(&registry, book_id).await?;
        assert_eq!(book.status, BookStatus::Borrowed);
        let request = find_request(&registry, request_id).await?;
        assert_eq!(request.status, RequestStatus::Borrowed);

        // ISBN スキャンで返却を確定
        let status = confirm_return(
            Path(book_id),
            State(registry.clone()),
            Json(ConfirmScanRequest {
                isbn: "0-7356-1976-0".into(),
            }),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);

        let book = fetch_book(&registry, book_id).await?;
        assert_eq!(book.status, BookStatus::Available);
        let deleted = registry.request_repository().find_by_id(request_id).await?;
        assert!(deleted.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_mismatched_isbn_leaves_both_records_unchanged() -> anyhow::Result<()> {
        let registry = registry();
        let book_id = register_book(&registry).await?;

        let (_, Json(created)) = request_book(
            Path(book_id),
            State(registry.clone()),
            Json(CreateRequestRequest {
                requester_id: "mary.jane9".into(),
            }),
        )
        .await?;
        let request_id = created.id;
        accept_request(
            Path((book_id, request_id)),
            State(registry.clone()),
            Json(AcceptRequestRequest {
                latitude: 53.5461,
                longitude: -113.4938,
            }),
        )
        .await?;

        // 別の本の ISBN をスキャンした場合は受け取りを確定できない
        let res = confirm_pickup(
            Path((book_id, request_id)),
            State(registry.clone()),
            Json(ConfirmScanRequest {
                isbn: "978-0-201-65788-3".into(),
            }),
        )
        .await;
        assert!(matches!(res, Err(AppError::IsbnMismatch(_))));

        let book = fetch_book(&registry, book_id).await?;
        assert_eq!(book.status, BookStatus::Accepted);
        let request = find_request(&registry, request_id).await?;
        assert_eq!(request.status, RequestStatus::Accepted);
        assert!(request.location.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_mismatched_isbn_on_return_keeps_book_borrowed() -> anyhow::Result<()> {
        let registry = registry();
        let book_id = register_book(&registry).await?;

        let (_, Json(created)) = request_book(
            Path(book_id),
            State(registry.clone()),
            Json(CreateRequestRequest {
                requester_id: "mary.jane9".into(),
            }),
        )
        .await?;
        let request_id = created.id;
        accept_request(
            Path((book_id, request_id)),
            State(registry.clone()),
            Json(AcceptRequestRequest {
                latitude: 53.5461,
                longitude: -113.4938,
            }),
        )
        .await?;
        confirm_pickup(
            Path((book_id, request_id)),
            State(registry.clone()),
            Json(ConfirmScanRequest {
                isbn: "0-7356-1976-0".into(),
            }),
        )
        .await?;

        // 別の本の ISBN をスキャンした場合は返却を確定できず、
        // リクエストも削除されない
        let res = confirm_return(
            Path(book_id),
            State(registry.clone()),
            Json(ConfirmScanRequest {
                isbn: "978-0-201-65788-3".into(),
            }),
        )
        .await;
        assert!(matches!(res, Err(AppError::IsbnMismatch(_))));

        let book = fetch_book(&registry, book_id).await?;
        assert_eq!(book.status, BookStatus::Borrowed);
        let request = find_request(&registry, request_id).await?;
        assert_eq!(request.status, RequestStatus::Borrowed);

        Ok(())
    }

    #[tokio::test]
    async fn test_requesting_accepted_or_borrowed_book_is_rejected() -> anyhow::Result<()> {
        let registry = registry();
        let book_id = register_book(&registry).await?;

        let (_, Json(created)) = request_book(
            Path(book_id),
            State(registry.clone()),
            Json(CreateRequestRequest {
                requester_id: "mary.jane9".into(),
            }),
        )
        .await?;
        accept_request(
            Path((book_id, created.id)),
            State(registry.clone()),
            Json(AcceptRequestRequest {
                latitude: 53.5461,
                longitude: -113.4938,
            }),
        )
        .await?;

        // 承認済みの蔵書には新たなリクエストを登録できない
        let res = request_book(
            Path(book_id),
            State(registry.clone()),
            Json(CreateRequestRequest {
                requester_id: "peter.parker1".into(),
            }),
        )
        .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_returning_non_borrowed_book_is_rejected() -> anyhow::Result<()> {
        let registry = registry();
        let book_id = register_book(&registry).await?;

        let res = confirm_return(
            Path(book_id),
            State(registry.clone()),
            Json(ConfirmScanRequest {
                isbn: "0-7356-1976-0".into(),
            }),
        )
        .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        Ok(())
    }
}
