use kernel::model::{
    geolocation::Geolocation,
    id::{BookId, RequestId, UserId},
    request::{Request, RequestStatus},
};
use serde::{Deserialize, Serialize};

// リクエストレコードの保存形。受け渡し場所は latitude / longitude の
// フラットなフィールドとして展開する
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDocument {
    pub book_id: BookId,
    pub requester_id: UserId,
    #[serde(flatten)]
    pub location: Option<Geolocation>,
    pub status: RequestStatus,
}

pub const FIELD_BOOK_ID: &str = "bookId";
pub const FIELD_REQUESTER_ID: &str = "requesterId";

impl From<Request> for RequestDocument {
    fn from(value: Request) -> Self {
        let Request {
            id: _,
            book_id,
            requester_id,
            location,
            status,
        } = value;
        Self {
            book_id,
            requester_id,
            location,
            status,
        }
    }
}

impl RequestDocument {
    pub fn into_request(self, id: RequestId) -> Request {
        let RequestDocument {
            book_id,
            requester_id,
            location,
            status,
        } = self;
        Request {
            id,
            book_id,
            requester_id,
            location,
            status,
        }
    }
}
