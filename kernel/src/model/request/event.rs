use derive_new::new;

use crate::model::id::{BookId, UserId};

// 新規リクエストは REQUESTED・受け渡し場所なしの状態で作られる
#[derive(new)]
pub struct CreateRequest {
    pub book_id: BookId,
    pub requester_id: UserId,
}
