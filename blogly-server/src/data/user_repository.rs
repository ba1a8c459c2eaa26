use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) image_url: String,
}

#[derive(Debug, Clone)]
pub(crate) struct UserPatch {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) image_url: String,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    /// All users ordered by last name, then first name.
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError>;
    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<Option<User>, DomainError>;
    /// Removes the user, its posts and their tag associations in one
    /// transaction. Returns false when the id does not resolve.
    async fn delete_user(&self, id: i64) -> Result<bool, DomainError>;
}
