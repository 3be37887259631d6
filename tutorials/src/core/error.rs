//! Typed registry errors.
//!
//! Every variant is a catalog programming error: startup treats them as fatal.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tutorial '{0}' is already registered")]
    DuplicateId(String),

    #[error("invalid {subject}:\n- {}", .violations.join("\n- "))]
    Validation {
        subject: String,
        violations: Vec<String>,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("diff binding refers to unknown tutorial '{0}'")]
    UnknownTutorial(String),
}

impl RegistryError {
    pub(crate) fn tutorial_not_found(id: &str) -> Self {
        Self::NotFound(format!("tutorial '{id}'"))
    }

    pub(crate) fn step_not_found(tutorial_id: &str, slug: &str) -> Self {
        Self::NotFound(format!("step '{slug}' in tutorial '{tutorial_id}'"))
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_violation() {
        let err = RegistryError::Validation {
            subject: "tutorial 'x'".to_string(),
            violations: vec!["steps must not be empty".to_string(), "title is blank".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "invalid tutorial 'x':\n- steps must not be empty\n- title is blank"
        );
    }
}
