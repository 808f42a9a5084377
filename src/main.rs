//! # gutensplit
//!
//! ```sh
//! gutensplit 0.1.0
//! French sentence dataset extraction from Project Gutenberg.
//!
//! USAGE:
//!     gutensplit [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!         --base-url <base-url>          document base url [default: https://www.gutenberg.org]
//!         --catalog-url <catalog-url>    catalog page [default: https://www.gutenberg.org/browse/languages/fr]
//!         --dst <dst>                    output csv file [default: french_sentences.csv]
//!         --head <head>                  number of leading units dropped [default: 50]
//!     -l, --limit <limit>                maximum number of books to process
//!         --min-words <min-words>        sentences must have more words than this [default: 5]
//!     -o, --offset <offset>              number of books to skip [default: 0]
//!         --tail <tail>                  number of trailing units dropped [default: 700]
//!         --timeout <timeout>            request timeout, in seconds. 0 disables it [default: 60]
//!         --user-agent <user-agent>      http user agent
//!     -t, --workers <workers>            number of concurrent workers [default: 5]
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info`).
use gutensplit::config::Config;
use gutensplit::error::Error;
use gutensplit::pipeline::{FrenchSentences, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Gutensplit::from_args();
    debug!("cli args\n{:#?}", opt);

    let config = Config::from(opt);
    let pipeline = FrenchSentences::from_config(config)?;
    let report = pipeline.run()?;

    info!(
        "{} sentences from {}/{} books written to {:?}",
        report.nb_rows,
        report.nb_books - report.failed.len(),
        report.nb_books,
        report.dst
    );
    if !report.failed.is_empty() {
        let failed: Vec<String> = report.failed.iter().map(|id| id.to_string()).collect();
        warn!("failed books: {}", failed.join(","));
    }

    Ok(())
}
