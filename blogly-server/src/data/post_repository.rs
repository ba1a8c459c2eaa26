use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::tag::Tag;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
    /// Candidate tag ids; ids that do not resolve to a tag are dropped.
    pub(crate) tag_ids: Vec<i64>,
    /// Storage assigns the current time when absent.
    pub(crate) created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) title: String,
    pub(crate) content: String,
    /// Replaces the full association set with the resolved ids.
    pub(crate) tag_ids: Vec<i64>,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    /// Most recent posts first, truncated to `limit`.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Post>, DomainError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, DomainError>;
    /// Removes the post and its association rows; the author is untouched.
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
    async fn tags_for_post(&self, post_id: i64) -> Result<Vec<Tag>, DomainError>;
    async fn posts_for_tag(&self, tag_id: i64) -> Result<Vec<Post>, DomainError>;
}
