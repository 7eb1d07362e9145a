//! Error types with fix suggestions
//!
//! A dependency cycle is a normal outcome, not an error: only reading the
//! input can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum TaskSortError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixSuggestion for TaskSortError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            TaskSortError::Io(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                Some("Input must be UTF-8 text, one task name per line")
            }
            TaskSortError::Io(_) => Some("Check that standard input is readable"),
            TaskSortError::ReadFile { .. } => Some("Check file path and permissions"),
        }
    }
}
