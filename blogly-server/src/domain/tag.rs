use serde::Serialize;

use super::error::DomainError;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Tag {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl Tag {
    pub(crate) fn new(id: i64, name: impl Into<String>) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation {
                field: "id",
                message: "must be > 0",
            });
        }
        let name = normalize_tag_name(&name.into())?;
        Ok(Self { id, name })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CreateTagRequest {
    pub(crate) name: String,
}

impl CreateTagRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            name: normalize_tag_name(&self.name)?,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UpdateTagRequest {
    pub(crate) name: String,
}

impl UpdateTagRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            name: normalize_tag_name(&self.name)?,
        })
    }
}

fn normalize_tag_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation {
            field: "name",
            message: "must not be empty",
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::{CreateTagRequest, Tag};

    #[test]
    fn tag_new_rejects_non_positive_id() {
        assert!(Tag::new(0, "fun").is_err());
    }

    #[test]
    fn create_request_trims_name() {
        let req = CreateTagRequest {
            name: "  fun  ".to_string(),
        };
        let validated = req.validate().expect("must validate");
        assert_eq!(validated.name, "fun");
    }

    #[test]
    fn create_request_rejects_blank_name() {
        let req = CreateTagRequest {
            name: "   ".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
