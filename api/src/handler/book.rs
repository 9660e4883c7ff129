use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::book::{event::DeleteBook, filter::BookFilter};
use kernel::model::id::{BookId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::book::{
    BookCreatedResponse, BookListQuery, BookResponse, BooksResponse, CreateBookRequest,
    DeleteBookQuery, UpdateBookRequest, UpdateBookRequestWithId,
};

pub async fn register_book(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    req.validate(&())?;

    let id = registry.book_repository().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(BookCreatedResponse { id })))
}

pub async fn show_book_list(
    Query(query): Query<BookListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BooksResponse>> {
    let filter = BookFilter::try_from(query)?;
    let books = registry.book_repository().find_all().await?;
    // 取得済みの一覧に対して同期的に絞り込みを適用する
    let visible = filter
        .apply(&books)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    Ok(Json(visible.into()))
}

pub async fn show_book(
    Path(book_id): Path<BookId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookResponse>> {
    registry
        .book_repository()
        .find_by_id(book_id)
        .await
        .and_then(|book| match book {
            Some(book) => Ok(Json(book.into())),
            None => Err(AppError::EntityNotFound(
                "指定された蔵書が見つかりませんでした。".into(),
            )),
        })
}

pub async fn update_book(
    Path(book_id): Path<BookId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_book = UpdateBookRequestWithId::new(book_id, req);
    registry
        .book_repository()
        .update(update_book.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_book(
    Path(book_id): Path<BookId>,
    Query(query): Query<DeleteBookQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let delete_book = DeleteBook {
        book_id,
        requested_user: UserId::new(query.requested_by),
    };
    registry
        .book_repository()
        .delete(delete_book)
        .await
        .map(|_| StatusCode::OK)
}
