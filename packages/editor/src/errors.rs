//! Error types for the editor

use pagecraft_model::tree::IntegrityIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Malformed component tree: {0:?}")]
    Integrity(Vec<IntegrityIssue>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
