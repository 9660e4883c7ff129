use garde::Validate;
use kernel::model::geolocation::Geolocation;
use kernel::model::id::{BookId, RequestId, UserId};
use kernel::model::request::{Request, RequestStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestRequest {
    #[garde(length(min = 1))]
    pub requester_id: String,
}

// 所有者が承認時に指定する受け渡し場所
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRequestRequest {
    #[garde(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[garde(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

// 受け取り・返却確定時に送るスキャン済み ISBN
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmScanRequest {
    #[garde(length(min = 1))]
    pub isbn: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreatedResponse {
    pub id: RequestId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestsResponse {
    pub items: Vec<RequestResponse>,
}

impl From<Vec<Request>> for RequestsResponse {
    fn from(value: Vec<Request>) -> Self {
        Self {
            items: value.into_iter().map(RequestResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub id: RequestId,
    pub book_id: BookId,
    pub requester_id: UserId,
    pub location: Option<GeolocationResponse>,
    pub status: RequestStatus,
}

impl From<Request> for RequestResponse {
    fn from(value: Request) -> Self {
        let Request {
            id,
            book_id,
            requester_id,
            location,
            status,
        } = value;
        Self {
            id,
            book_id,
            requester_id,
            location: location.map(GeolocationResponse::from),
            status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationResponse {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Geolocation> for GeolocationResponse {
    fn from(value: Geolocation) -> Self {
        let Geolocation {
            latitude,
            longitude,
        } = value;
        Self {
            latitude,
            longitude,
        }
    }
}
