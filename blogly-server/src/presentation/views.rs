use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::post::Post;
use crate::domain::tag::Tag;
use crate::domain::user::User;

#[derive(Debug, Serialize)]
pub(crate) struct UserView {
    pub(crate) id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) image_url: String,
    pub(crate) full_name: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        let full_name = user.full_name();
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
            full_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PostView {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) formatted_date: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        let formatted_date = post.formatted_date();
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: post.created_at,
            formatted_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TagView {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl From<Tag> for TagView {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}
