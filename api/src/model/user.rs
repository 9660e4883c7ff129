use garde::Validate;
use kernel::model::{id::UserId, user::User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email_address: String,
    #[garde(length(min = 1))]
    pub phone_number: String,
}

impl From<CreateUserRequest> for User {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            first_name,
            last_name,
            email_address,
            phone_number,
        } = value;
        User {
            id: UserId::new(username),
            first_name,
            last_name,
            email_address,
            phone_number,
        }
    }
}

// ユーザー名と氏名は変更できず、連絡先のみ編集できる
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[garde(email)]
    pub email_address: String,
    #[garde(length(min = 1))]
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email_address,
            phone_number,
        } = value;
        Self {
            username: id,
            first_name,
            last_name,
            email_address,
            phone_number,
        }
    }
}
