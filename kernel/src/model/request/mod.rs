use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::model::geolocation::Geolocation;
use crate::model::id::{BookId, RequestId, UserId};

pub mod event;

// 蔵書・リクエスト元ユーザーはどちらも ID による弱参照
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: RequestId,
    pub book_id: BookId,
    pub requester_id: UserId,
    pub location: Option<Geolocation>,
    pub status: RequestStatus,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Requested,
    Accepted,
    Borrowed,
}
