use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use kernel::model::id::PhotographId;
use kernel::model::photograph::Photograph;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::photograph::PhotographCreatedResponse;

pub async fn upload_photograph(
    State(registry): State<AppRegistry>,
    content: Bytes,
) -> AppResult<(StatusCode, Json<PhotographCreatedResponse>)> {
    let photograph = Photograph {
        id: PhotographId::new(),
        content: content.to_vec(),
    };
    let id = photograph.id;
    registry.photograph_repository().store(photograph).await?;
    Ok((StatusCode::CREATED, Json(PhotographCreatedResponse { id })))
}

pub async fn show_photograph(
    Path(photograph_id): Path<PhotographId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    let photograph = registry
        .photograph_repository()
        .find_by_id(photograph_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound("指定された写真が見つかりませんでした。".into())
        })?;
    Ok((
        [(header::CONTENT_TYPE, "image/jpeg")],
        photograph.content,
    ))
}

pub async fn delete_photograph(
    Path(photograph_id): Path<PhotographId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .photograph_repository()
        .delete(photograph_id)
        .await
        .map(|_| StatusCode::OK)
}
