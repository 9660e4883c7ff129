use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::book::{filter::BookFilter, BookStatus};
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::book::BooksResponse;
use crate::model::user::{CreateUserRequest, UpdateUserRequest, UserResponse};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .user_repository()
        .store(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_user(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_username(&UserId::new(username))
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound(
                "指定されたユーザーが見つかりませんでした。".into(),
            )),
        })
}

pub async fn update_user(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let username = UserId::new(username);
    let mut user = registry
        .user_repository()
        .find_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound("指定されたユーザーが見つかりませんでした。".into())
        })?;

    user.email_address = req.email_address;
    user.phone_number = req.phone_number;
    registry
        .user_repository()
        .store(user)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_owned_books(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BooksResponse>> {
    registry
        .book_repository()
        .find_by_owner(&UserId::new(username))
        .await
        .map(BooksResponse::from)
        .map(Json)
}

// 借用者向けの一覧はリクエスト済みの蔵書をステータス集合を変えた
// BookFilter で出し分ける
pub async fn show_pending_books(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BooksResponse>> {
    show_requested_books(
        registry,
        username,
        [BookStatus::Requested, BookStatus::Accepted],
    )
    .await
}

pub async fn show_borrowed_books(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BooksResponse>> {
    show_requested_books(registry, username, [BookStatus::Borrowed]).await
}

async fn show_requested_books(
    registry: AppRegistry,
    username: String,
    statuses: impl IntoIterator<Item = BookStatus>,
) -> AppResult<Json<BooksResponse>> {
    let books = registry
        .book_repository()
        .find_by_requester(&UserId::new(username))
        .await?;
    let filter = BookFilter::new(statuses, "");
    let visible = filter
        .apply(&books)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    Ok(Json(visible.into()))
}
