//! Functional consequence of sequence variants on transcript models.

pub mod checkers;
pub mod classifier;
pub mod context;
pub mod effect;
pub mod transcript;
pub(crate) mod utils;
pub mod variant;
