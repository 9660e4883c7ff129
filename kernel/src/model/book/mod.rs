use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::model::id::{BookId, PhotographId, UserId};

pub mod event;
pub mod filter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub owner_id: UserId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub photograph: Option<PhotographId>,
    pub status: BookStatus,
}

impl Book {
    // 借用・返却の確定はスキャンした ISBN が蔵書の ISBN と
    // 完全一致する場合のみ有効。不一致なら状態は一切変更しない
    pub fn verify_isbn(&self, scanned: &str) -> AppResult<()> {
        if self.isbn == scanned {
            Ok(())
        } else {
            Err(AppError::IsbnMismatch(scanned.into()))
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    Available,
    Requested,
    Accepted,
    Borrowed,
}
