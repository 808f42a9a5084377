/*! Content processing

Turns extracted sentences into timestamped, deduplicated records.
!*/
pub mod dedup;
mod records;

pub use records::filter_and_timestamp;
