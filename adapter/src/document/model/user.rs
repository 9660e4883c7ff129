use kernel::model::{id::UserId, user::User};
use serde::{Deserialize, Serialize};

// ユーザーレコードの保存形。ドキュメント ID がユーザー名を兼ねる
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
}

impl From<User> for UserDocument {
    fn from(value: User) -> Self {
        let User {
            id: _,
            first_name,
            last_name,
            email_address,
            phone_number,
        } = value;
        Self {
            first_name,
            last_name,
            email_address,
            phone_number,
        }
    }
}

impl UserDocument {
    pub fn into_user(self, id: UserId) -> User {
        let UserDocument {
            first_name,
            last_name,
            email_address,
            phone_number,
        } = self;
        User {
            id,
            first_name,
            last_name,
            email_address,
            phone_number,
        }
    }
}
