use serde::Serialize;

use super::error::DomainError;

/// Placeholder avatar used when a user is created without an image.
pub(crate) const DEFAULT_IMAGE_URL: &str =
    "https://www.freeiconspng.com/uploads/icon-user-blue-symbol-people-person-generic--public-domain--21.png";

const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) image_url: String,
}

impl User {
    pub(crate) fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation {
                field: "id",
                message: "must be > 0",
            });
        }
        let first_name = normalize_name("first_name", &first_name.into())?;
        let last_name = normalize_name("last_name", &last_name.into())?;
        let image_url = normalize_image_url(Some(image_url.into()));

        Ok(Self {
            id,
            first_name,
            last_name,
            image_url,
        })
    }

    pub(crate) fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CreateUserRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) image_url: Option<String>,
}

impl CreateUserRequest {
    /// An empty or missing `image_url` is not an error; it takes the default.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: normalize_name("first_name", &self.first_name)?,
            last_name: normalize_name("last_name", &self.last_name)?,
            image_url: Some(normalize_image_url(self.image_url)),
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UpdateUserRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) image_url: Option<String>,
}

impl UpdateUserRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: normalize_name("first_name", &self.first_name)?,
            last_name: normalize_name("last_name", &self.last_name)?,
            image_url: Some(normalize_image_url(self.image_url)),
        })
    }
}

fn normalize_name(field: &'static str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() || value.len() > MAX_NAME_LEN {
        return Err(DomainError::Validation {
            field,
            message: "must be 1..50 chars",
        });
    }
    Ok(value.to_string())
}

fn normalize_image_url(value: Option<String>) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_IMAGE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateUserRequest, DEFAULT_IMAGE_URL, DomainError, User};

    #[test]
    fn full_name_joins_first_and_last() {
        let user = User::new(1, "TestUserFirst", "TestUserLast", DEFAULT_IMAGE_URL)
            .expect("user should be valid");
        assert_eq!(user.full_name(), "TestUserFirst TestUserLast");
    }

    #[test]
    fn user_new_rejects_non_positive_id() {
        let result = User::new(0, "Jane", "Doe", DEFAULT_IMAGE_URL);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_rejects_blank_first_name() {
        let req = CreateUserRequest {
            first_name: "   ".to_string(),
            last_name: "Doe".to_string(),
            image_url: None,
        };

        let err = req.validate().expect_err("first_name must be rejected");
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "first_name"),
            _ => panic!("expected DomainError::Validation"),
        }
    }

    #[test]
    fn create_request_defaults_blank_image_url() {
        let req = CreateUserRequest {
            first_name: "  Jane ".to_string(),
            last_name: "Doe".to_string(),
            image_url: Some("   ".to_string()),
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.first_name, "Jane");
        assert_eq!(validated.image_url.as_deref(), Some(DEFAULT_IMAGE_URL));
    }

    #[test]
    fn create_request_keeps_explicit_image_url() {
        let req = CreateUserRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            image_url: Some("https://example.com/jane.png".to_string()),
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(
            validated.image_url.as_deref(),
            Some("https://example.com/jane.png")
        );
    }
}
