use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::tag::Tag;

#[derive(Debug, Clone)]
pub(crate) struct NewTag {
    pub(crate) name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct TagPatch {
    pub(crate) name: String,
}

#[async_trait]
pub(crate) trait TagRepository: Send + Sync {
    async fn list_tags(&self) -> Result<Vec<Tag>, DomainError>;
    async fn get_tag(&self, id: i64) -> Result<Option<Tag>, DomainError>;
    async fn create_tag(&self, input: NewTag) -> Result<Tag, DomainError>;
    async fn update_tag(&self, id: i64, patch: TagPatch) -> Result<Option<Tag>, DomainError>;
    /// Removes the tag and its association rows; posts are untouched.
    async fn delete_tag(&self, id: i64) -> Result<bool, DomainError>;
}
