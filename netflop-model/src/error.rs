use std::fmt::{self, Display};

/// Errors produced by model parsers and constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownMediaKind(String),
    UnknownTimeWindow(String),
    UnknownTheme(String),
    InvalidId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownMediaKind(raw) => {
                write!(f, "unknown media kind: {raw}")
            }
            ModelError::UnknownTimeWindow(raw) => {
                write!(f, "unknown trending window: {raw}")
            }
            ModelError::UnknownTheme(raw) => write!(f, "unknown theme: {raw}"),
            ModelError::InvalidId(raw) => {
                write!(f, "invalid catalog id: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
