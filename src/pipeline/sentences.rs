//! French sentences pipeline
//!
//! # Processing
//! 1. The catalog is scraped for French book ids.
//! 1. Ids are selected according to the configured offset/limit.
//! 1. On a fixed-size worker pool, each book is fetched, split into sentences,
//!   filtered, deduplicated and timestamped.
//! 1. Books are concatenated in catalog order and written into a csv file.
//!
//! Failing books are logged and left out of the output.
//! Only a catalog failure stops the run.
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use rayon::prelude::*;

use super::Pipeline;
use crate::catalog::discover_ids;
use crate::config::Config;
use crate::error::Error;
use crate::filtering::WordCount;
use crate::io::CsvWriter;
use crate::processing::filter_and_timestamp;
use crate::sources::{Gutenberg, Source};
use crate::transformers::Extractor;
use crate::types::{BookId, BookSentences, OutputTable};

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// number of processed books (after offset/limit)
    pub nb_books: usize,
    /// books that could not be fetched
    pub failed: Vec<BookId>,
    pub nb_rows: usize,
    pub dst: PathBuf,
}

pub struct FrenchSentences<S: Source> {
    source: S,
    config: Config,
    extractor: Extractor,
    filter: WordCount,
}

impl FrenchSentences<Gutenberg> {
    /// Pipeline fetching from Project Gutenberg over HTTP.
    pub fn from_config(config: Config) -> Result<Self, Error> {
        let source = Gutenberg::new(&config)?;
        Ok(Self::new(source, config))
    }
}

impl<S: Source> FrenchSentences<S> {
    pub fn new(source: S, config: Config) -> Self {
        let extractor = Extractor::new(config.trim);
        let filter = WordCount::with_min_words(config.min_words);
        Self {
            source,
            config,
            extractor,
            filter,
        }
    }

    /// Fetch a book and build its records.
    pub fn process_book(&self, id: BookId, anchor: NaiveDateTime) -> Result<BookSentences, Error> {
        let raw = self.source.document(id)?;
        let sentences = self.extractor.extract(&raw);
        let nb_sentences = sentences.len();
        let records = filter_and_timestamp(sentences, anchor, &self.filter);

        debug!(
            "book {}: kept {}/{} sentences",
            id,
            records.len(),
            nb_sentences
        );
        Ok(BookSentences::new(id, records))
    }

    /// Process `ids` on the worker pool and concatenate results in `ids` order.
    ///
    /// Returns the table along with the ids of books that failed.
    pub fn gather(
        &self,
        ids: &[BookId],
        anchor: NaiveDateTime,
    ) -> Result<(OutputTable, Vec<BookId>), Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.nb_workers())
            .build()?;

        // indexed parallel iterators keep their order when collected
        let results: Vec<(BookId, Result<BookSentences, Error>)> = pool.install(|| {
            ids.par_iter()
                .map(|id| (*id, self.process_book(*id, anchor)))
                .collect()
        });

        let mut books = Vec::with_capacity(results.len());
        let mut failed = Vec::new();
        for (id, result) in results {
            match result {
                Ok(book) => books.push(book),
                Err(e) => {
                    warn!("book {} skipped: {}", id, e);
                    failed.push(id);
                }
            }
        }

        Ok((OutputTable::concat(books), failed))
    }

    /// Run the pipeline with timestamps anchored at `anchor`.
    pub fn run_at(&self, anchor: NaiveDateTime) -> Result<RunReport, Error> {
        info!("anchor time is {}", anchor);
        let ids = discover_ids(&self.source)?;
        let ids = self.config.select(&ids);
        info!(
            "processing {} books with {} workers",
            ids.len(),
            self.config.nb_workers()
        );

        let (table, failed) = self.gather(&ids, anchor)?;
        if !failed.is_empty() {
            warn!("{}/{} books failed", failed.len(), ids.len());
        }

        let mut writer = CsvWriter::from_path(&self.config.dst)?;
        writer.write_table(&table)?;
        info!("wrote {} sentences", table.len());

        Ok(RunReport {
            nb_books: ids.len(),
            failed,
            nb_rows: table.len(),
            dst: self.config.dst.clone(),
        })
    }
}

impl<S: Source> Pipeline<RunReport> for FrenchSentences<S> {
    fn run(&self) -> Result<RunReport, Error> {
        self.run_at(Local::now().naive_local())
    }
}
