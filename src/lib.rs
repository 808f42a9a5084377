//! # gutensplit
//!
//! Builds a dataset of French sentences out of Project Gutenberg books.
//!
//! French books are discovered on the catalog page, their plain text is downloaded
//! on a bounded worker pool, split into sentences that are filtered, deduplicated and
//! given synthetic timestamps, then everything is written into a single csv file.
//!
//! ```no_run
//! use gutensplit::config::Config;
//! use gutensplit::pipeline::{FrenchSentences, Pipeline};
//!
//! let pipeline = FrenchSentences::from_config(Config::default())?;
//! let report = pipeline.run()?;
//! println!("{} sentences written", report.nb_rows);
//! # Ok::<(), gutensplit::error::Error>(())
//! ```
pub mod catalog;
pub mod config;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipeline;
pub mod processing;
pub mod sources;
pub mod transformers;
pub mod types;
