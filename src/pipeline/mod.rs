//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by [FrenchSentences] that runs the whole extraction.
#[allow(clippy::module_inception)]
pub mod pipeline;
mod sentences;

pub use pipeline::Pipeline;
pub use sentences::{FrenchSentences, RunReport};
