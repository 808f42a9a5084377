//! Run parameters.
//!
//! Defaults: 5 workers, 50/700 boilerplate units, sentences of more than 5 words.
use std::path::PathBuf;
use std::time::Duration;

use crate::transformers::TrimPolicy;

pub const CATALOG_URL: &str = "https://www.gutenberg.org/browse/languages/fr";
pub const BASE_URL: &str = "https://www.gutenberg.org";
pub const DST: &str = "french_sentences.csv";
pub const NB_WORKERS: usize = 5;
pub const MIN_WORDS: usize = 5;
pub const TIMEOUT_SECS: u64 = 60;
pub const USER_AGENT: &str = concat!("gutensplit/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
    /// output csv path. Overwritten if it exists.
    pub dst: PathBuf,
    pub catalog_url: String,
    /// documents are fetched from `<base_url>/cache/epub/<id>/pg<id>.txt`
    pub base_url: String,
    pub workers: usize,
    pub trim: TrimPolicy,
    pub min_words: usize,
    /// number of discovered ids to skip
    pub offset: usize,
    /// maximum number of ids to process
    pub limit: Option<usize>,
    /// request timeout, `None` disables it
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dst: PathBuf::from(DST),
            catalog_url: CATALOG_URL.to_string(),
            base_url: BASE_URL.to_string(),
            workers: NB_WORKERS,
            trim: TrimPolicy::default(),
            min_words: MIN_WORDS,
            offset: 0,
            limit: None,
            timeout: Some(Duration::from_secs(TIMEOUT_SECS)),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Number of threads of the worker pool, at least 1.
    pub fn nb_workers(&self) -> usize {
        self.workers.max(1)
    }

    /// Select the ids to process according to `offset` and `limit`.
    pub fn select<T: Clone>(&self, ids: &[T]) -> Vec<T> {
        let ids = ids.iter().skip(self.offset).cloned();
        match self.limit {
            Some(limit) => ids.take(limit).collect(),
            None => ids.collect(),
        }
    }
}
