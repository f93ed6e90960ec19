//! Error type definition.

use thiserror::Error;

/// Error type for effects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown effect type: {0:?}")]
    UnknownEffectType(String),
}
