use kernel::model::id::PhotographId;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographCreatedResponse {
    pub id: PhotographId,
}
