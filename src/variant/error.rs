//! Error type definition.

use thiserror::Error;

/// Error type for variant construction and parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid position {0}; positions are 1-based")]
    InvalidPosition(i32),
    #[error("invalid allele {0:?}; expected nucleotides A, C, G, T, N")]
    InvalidAllele(String),
    #[error("could not parse variant from {0:?}; expected chrom:pos:ref:alt")]
    InvalidVariantString(String),
}
