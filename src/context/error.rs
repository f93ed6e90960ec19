//! Error type definition.

use thiserror::Error;

/// Error type for queries against a variant effect context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("amino acids could not be determined: {0}")]
    AminoAcidsUnavailable(String),
}
