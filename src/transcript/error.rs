//! Error type definition.

use thiserror::Error;

/// Error type for transcript models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid transcript model {transcript_id}: {reason}")]
    InvalidTranscriptModel {
        transcript_id: String,
        reason: String,
    },
    #[error("invalid strand: {0}")]
    InvalidStrand(String),
}
