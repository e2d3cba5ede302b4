use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by entities that validate eagerly.
/// Each variant is a distinct failure mode callers can match on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    PreconditionFailed(String),
}

impl EntityError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn precondition_failed(message: impl Into<String>) -> Self {
        Self::PreconditionFailed(message.into())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown lesson '{0}' (expected one of: abstraction, classes, encapsulation, inheritance, polymorphism)")]
    UnknownLesson(String),
}

/// Error that aborts a running lesson.
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("lesson '{lesson}' aborted: {source}")]
    Entity {
        lesson: String,
        #[source]
        source: EntityError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_error_displays_message_verbatim() {
        let err = EntityError::invalid_argument("Amount must be positive!");
        assert_eq!(err.to_string(), "Amount must be positive!");

        let err = EntityError::precondition_failed("Not enough water!");
        assert_eq!(err.to_string(), "Not enough water!");
    }

    #[test]
    fn lesson_error_names_the_lesson() {
        let err = LessonError::Entity {
            lesson: "abstraction".to_string(),
            source: EntityError::invalid_argument("Amount must be positive!"),
        };
        assert_eq!(
            err.to_string(),
            "lesson 'abstraction' aborted: Amount must be positive!"
        );
    }

    #[test]
    fn unknown_lesson_names_the_input() {
        let err = ConfigError::UnknownLesson("recursion".into());
        assert!(err.to_string().starts_with("unknown lesson 'recursion'"));
    }
}
