use kernel::model::{
    book::{Book, BookStatus},
    id::{BookId, PhotographId, UserId},
};
use serde::{Deserialize, Serialize};

// 蔵書レコードの保存形。フィールド名は camelCase で保存する
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDocument {
    pub owner_id: UserId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub photograph: Option<PhotographId>,
    pub status: BookStatus,
}

// find_where に渡す保存形のフィールド名
pub const FIELD_OWNER_ID: &str = "ownerId";

impl From<Book> for BookDocument {
    fn from(value: Book) -> Self {
        let Book {
            id: _,
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
            status,
        } = value;
        Self {
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
            status,
        }
    }
}

impl BookDocument {
    // ドキュメント ID と組み合わせてエンティティに戻す
    pub fn into_book(self, id: BookId) -> Book {
        let BookDocument {
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
            status,
        } = self;
        Book {
            id,
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
            status,
        }
    }
}
