use derive_new::new;
use garde::Validate;
use kernel::model::book::{
    event::{CreateBook, UpdateBook},
    filter::BookFilter,
    Book, BookStatus,
};
use kernel::model::id::{BookId, PhotographId, UserId};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[garde(length(min = 1))]
    pub owner_id: String,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(length(min = 1))]
    pub isbn: String,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub photograph: Option<PhotographId>,
}

impl From<CreateBookRequest> for CreateBook {
    fn from(value: CreateBookRequest) -> Self {
        let CreateBookRequest {
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
        } = value;
        CreateBook {
            owner_id: UserId::new(owner_id),
            title,
            author,
            isbn,
            description,
            photograph,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(length(min = 1))]
    pub isbn: String,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub photograph: Option<PhotographId>,
}

#[derive(new)]
pub struct UpdateBookRequestWithId(BookId, UpdateBookRequest);

impl From<UpdateBookRequestWithId> for UpdateBook {
    fn from(value: UpdateBookRequestWithId) -> Self {
        let UpdateBookRequestWithId(
            book_id,
            UpdateBookRequest {
                title,
                author,
                isbn,
                description,
                photograph,
            },
        ) = value;
        UpdateBook {
            book_id,
            title,
            author,
            isbn,
            description,
            photograph,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookQuery {
    pub requested_by: String,
}

// 一覧表示の絞り込み条件。status はカンマ区切りのステータス名で、
// 省略時はすべて有効、空文字列は空集合（何も表示しない）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListQuery {
    pub status: Option<String>,
    pub query: Option<String>,
}

impl TryFrom<BookListQuery> for BookFilter {
    type Error = AppError;

    fn try_from(value: BookListQuery) -> Result<Self, Self::Error> {
        let BookListQuery { status, query } = value;
        let query = query.unwrap_or_default();
        match status {
            None => {
                let mut filter = BookFilter::default();
                filter.set_query(query);
                Ok(filter)
            }
            Some(names) => {
                let statuses = names
                    .split(',')
                    .filter(|name| !name.is_empty())
                    .map(|name| {
                        name.parse::<BookStatus>().map_err(|_| {
                            AppError::UnprocessableEntity(format!("不明なステータスです: {name}"))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(BookFilter::new(statuses, query))
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedResponse {
    pub id: BookId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooksResponse {
    pub items: Vec<BookResponse>,
}

impl From<Vec<Book>> for BooksResponse {
    fn from(value: Vec<Book>) -> Self {
        Self {
            items: value.into_iter().map(BookResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: BookId,
    pub owner_id: UserId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub photograph: Option<PhotographId>,
    pub status: BookStatus,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        let Book {
            id,
            owner_id,
            title,
            author,
            isbn,
            description,
            photograph,
            status,
        } = value;
        Self {
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
