//! Error types.
//!
//! Only conditions a caller must act on are errors. An unresolved reference,
//! a symbol that cannot be renamed, or a half-resolved model degrade to "no
//! match" / "no edit" and never show up here.

use std::sync::Arc;

use thiserror::Error;

use crate::base::CodePosition;
use crate::model::{ConstructId, SentenceId};

/// Failures reported to the request layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    /// No model is loaded for the document.
    #[error("no program is loaded for `{uri}`")]
    NotLoaded { uri: Arc<str> },
    /// A rename target name that is empty or not an identifier.
    #[error("`{name}` is not a valid name")]
    InvalidName { name: String },
}

pub type Result<T> = std::result::Result<T, AssistError>;

/// Structural problems found while finishing a [`ModelBuilder`](crate::model::ModelBuilder).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("phrase at {next} starts before its preceding sibling at {previous}")]
    UnorderedPhrases {
        previous: CodePosition,
        next: CodePosition,
    },
    #[error("unknown construct {0:?}")]
    UnknownConstruct(ConstructId),
    #[error("unknown sentence {0:?}")]
    UnknownSentence(SentenceId),
}

/// Failures loading a reading dictionary.
#[derive(Error, Debug)]
pub enum ReadingTableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed entry on line {line}")]
    Malformed { line: usize },
}
