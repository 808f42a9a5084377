/*! Filtering utilities

Filters operate on sentence level and implement [filter::Filter]:
they are stateless, so the same sentence always gets the same answer.
! */
mod filter;
mod sentence;

pub use filter::Filter;
pub use sentence::{word_count, WordCount};
