//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::time::Duration;

use gutensplit::config::Config;
use gutensplit::transformers::TrimPolicy;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "gutensplit",
    about = "French sentence dataset extraction from Project Gutenberg."
)]
pub struct Gutensplit {
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "output csv file",
        default_value = "french_sentences.csv"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "catalog-url",
        help = "catalog page",
        default_value = "https://www.gutenberg.org/browse/languages/fr"
    )]
    pub catalog_url: String,
    #[structopt(
        long = "base-url",
        help = "document base url",
        default_value = "https://www.gutenberg.org"
    )]
    pub base_url: String,
    #[structopt(
        short = "t",
        long = "workers",
        help = "number of concurrent workers",
        default_value = "5"
    )]
    pub workers: usize,
    #[structopt(long = "head", help = "number of leading units dropped", default_value = "50")]
    pub head: usize,
    #[structopt(long = "tail", help = "number of trailing units dropped", default_value = "700")]
    pub tail: usize,
    #[structopt(
        long = "min-words",
        help = "sentences must have more words than this",
        default_value = "5"
    )]
    pub min_words: usize,
    #[structopt(
        short = "o",
        long = "offset",
        help = "number of books to skip",
        default_value = "0"
    )]
    pub offset: usize,
    #[structopt(short = "l", long = "limit", help = "maximum number of books to process")]
    pub limit: Option<usize>,
    #[structopt(
        long = "timeout",
        help = "request timeout, in seconds. 0 disables it",
        default_value = "60"
    )]
    pub timeout: u64,
    #[structopt(long = "user-agent", help = "http user agent")]
    pub user_agent: Option<String>,
}

impl From<Gutensplit> for Config {
    fn from(opt: Gutensplit) -> Self {
        let default = Config::default();
        Config {
            dst: opt.dst,
            catalog_url: opt.catalog_url,
            base_url: opt.base_url,
            workers: opt.workers,
            trim: TrimPolicy::new(opt.head, opt.tail),
            min_words: opt.min_words,
            offset: opt.offset,
            limit: opt.limit,
            timeout: match opt.timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            user_agent: opt.user_agent.unwrap_or(default.user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let opt = Gutensplit::from_iter(&["gutensplit"]);
        let c = Config::from(opt);
        let d = Config::default();

        assert_eq!(c.dst, d.dst);
        assert_eq!(c.catalog_url, d.catalog_url);
        assert_eq!(c.base_url, d.base_url);
        assert_eq!(c.workers, d.workers);
        assert_eq!(c.trim, d.trim);
        assert_eq!(c.min_words, d.min_words);
        assert_eq!(c.offset, 0);
        assert_eq!(c.limit, None);
        assert_eq!(c.timeout, d.timeout);
        assert_eq!(c.user_agent, d.user_agent);
    }

    #[test]
    fn options() {
        let opt = Gutensplit::from_iter(&[
            "gutensplit",
            "--dst",
            "out.csv",
            "-t",
            "2",
            "--head",
            "0",
            "-l",
            "10",
        ]);
        let c = Config::from(opt);
        assert_eq!(c.dst, PathBuf::from("out.csv"));
        assert_eq!(c.workers, 2);
        assert_eq!(c.trim, TrimPolicy::new(0, 700));
        assert_eq!(c.limit, Some(10));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let opt = Gutensplit::from_iter(&["gutensplit", "--timeout", "0"]);
        assert_eq!(Config::from(opt).timeout, None);

        let opt = Gutensplit::from_iter(&["gutensplit", "--timeout", "5"]);
        assert_eq!(Config::from(opt).timeout, Some(Duration::from_secs(5)));
    }
}
