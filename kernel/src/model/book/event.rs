use derive_new::new;

use crate::model::id::{BookId, PhotographId, UserId};

#[derive(new)]
pub struct CreateBook {
    pub owner_id: UserId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub photograph: Option<PhotographId>,
}

#[derive(Debug)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub photograph: Option<PhotographId>,
}

#[derive(Debug)]
pub struct DeleteBook {
    pub book_id: BookId,
    pub requested_user: UserId,
}
