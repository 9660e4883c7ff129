use serde::{de::DeserializeOwned, Serialize};
use shared::error::{AppError, AppResult};

use super::Document;

pub mod book;
pub mod request;
pub mod user;

// エンティティをフラットなドキュメントへ変換する
pub(crate) fn to_document<T: Serialize>(value: &T) -> AppResult<Document> {
    let value = serde_json::to_value(value).map_err(AppError::ConversionEntityError)?;
    serde_json::from_value(value).map_err(AppError::ConversionEntityError)
}

// ドキュメントからエンティティを復元する
pub(crate) fn from_document<T: DeserializeOwned>(document: Document) -> AppResult<T> {
    serde_json::from_value(serde_json::Value::Object(document))
        .map_err(AppError::ConversionEntityError)
}
