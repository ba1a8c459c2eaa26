use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::DomainError;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl Post {
    pub(crate) fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("user_id", user_id)?;
        let title = normalize_title(&title.into())?;
        let content = normalize_content(&content.into())?;

        Ok(Self {
            id,
            title,
            content,
            user_id,
            created_at,
        })
    }

    /// Human-readable creation date, e.g. `Wed Jan 1 2020, 12:00 AM`.
    pub(crate) fn formatted_date(&self) -> String {
        self.created_at.format("%a %b %-d %Y, %-I:%M %p").to_string()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tag_ids: Vec<i64>,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            content: normalize_content(&self.content)?,
            tag_ids: self.tag_ids,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UpdatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tag_ids: Vec<i64>,
}

impl UpdatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            content: normalize_content(&self.content)?,
            tag_ids: self.tag_ids,
        })
    }
}

fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation {
            field: "title",
            message: "must not be empty",
        });
    }
    Ok(title.to_string())
}

fn normalize_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation {
            field: "content",
            message: "must not be empty",
        });
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{CreatePostRequest, DomainError, Post, UpdatePostRequest};

    #[test]
    fn formatted_date_renders_unpadded_day_and_hour() {
        let created_at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let post = Post::new(1, "TestTitle", "Content Goes Here", 1, created_at)
            .expect("post should be valid");

        assert_eq!(post.formatted_date(), "Wed Jan 1 2020, 12:00 AM");
    }

    #[test]
    fn formatted_date_renders_afternoon_hours() {
        let created_at = Utc.with_ymd_and_hms(2021, 12, 25, 15, 5, 0).unwrap();
        let post =
            Post::new(1, "Title", "Content", 1, created_at).expect("post should be valid");

        assert_eq!(post.formatted_date(), "Sat Dec 25 2021, 3:05 PM");
    }

    #[test]
    fn create_request_rejects_empty_title() {
        let req = CreatePostRequest {
            title: "   ".to_string(),
            content: "valid content".to_string(),
            tag_ids: vec![],
        };

        let err = req.validate().expect_err("title must be rejected");
        assert_validation_field(err, "title");
    }

    #[test]
    fn update_request_rejects_empty_content() {
        let req = UpdatePostRequest {
            title: "valid title".to_string(),
            content: "   ".to_string(),
            tag_ids: vec![1],
        };

        let err = req.validate().expect_err("content must be rejected");
        assert_validation_field(err, "content");
    }

    #[test]
    fn create_request_normalizes_and_keeps_tag_ids() {
        let req = CreatePostRequest {
            title: "  title  ".to_string(),
            content: "  content  ".to_string(),
            tag_ids: vec![3, 1],
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.title, "title");
        assert_eq!(validated.content, "content");
        assert_eq!(validated.tag_ids, vec![3, 1]);
    }

    #[test]
    fn post_new_rejects_non_positive_user_id() {
        let err = Post::new(1, "Title", "Content", 0, Utc::now())
            .expect_err("user_id must be > 0");
        assert_validation_field(err, "user_id");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
