use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, user::User};
use kernel::repository::user::UserRepository;
use shared::error::AppResult;

use crate::document::model::user::UserDocument;
use crate::document::model::{from_document, to_document};
use crate::document::{collection, DocumentStore};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: DocumentStore,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn store(&self, user: User) -> AppResult<()> {
        let id = user.id.to_string();
        let document = to_document(&UserDocument::from(user))?;
        self.db.upsert(collection::USERS, &id, document).await
    }

    async fn find_by_username(&self, username: &UserId) -> AppResult<Option<User>> {
        let Some(document) = self
            .db
            .find_by_id(collection::USERS, username.as_str())
            .await?
        else {
            return Ok(None);
        };
        let document: UserDocument = from_document(document)?;
        Ok(Some(document.into_user(username.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_user(username: &str) -> User {
        User {
            id: UserId::new(username),
            first_name: "John".into(),
            last_name: "Smith".into(),
            email_address: "jsmith@ualberta.ca".into(),
            phone_number: "7801234567".into(),
        }
    }

    #[tokio::test]
    async fn test_store_and_find_user() -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(DocumentStore::new());

        repo.store(mock_user("john.smith42")).await?;

        let res = repo.find_by_username(&UserId::new("john.smith42")).await?;
        assert_eq!(res, Some(mock_user("john.smith42")));

        let missing = repo.find_by_username(&UserId::new("mary.jane9")).await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_store_replaces_profile() -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(DocumentStore::new());

        repo.store(mock_user("john.smith42")).await?;

        let mut edited = mock_user("john.smith42");
        edited.email_address = "john.smith@ualberta.ca".into();
        repo.store(edited).await?;

        let res = repo
            .find_by_username(&UserId::new("john.smith42"))
            .await?
            .unwrap();
        assert_eq!(res.email_address, "john.smith@ualberta.ca");
        Ok(())
    }
}
