use crate::model::id::UserId;

// ユーザー名が主キー。メールアドレスと電話番号のみ編集可能
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
}
