use crate::model::id::PhotographId;

// 蔵書に添付する写真
// 画像のバイト列は写真 ID をキーとして blob ストア側に保存される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photograph {
    pub id: PhotographId,
    pub content: Vec<u8>,
}
