//! Project Gutenberg over HTTP.
use log::debug;
use reqwest::blocking::Client;
use reqwest::Url;

use super::Source;
use crate::config::Config;
use crate::error::Error;
use crate::types::BookId;

/// holds the catalog url, the document base url and
/// the http client that will make the requests.
#[derive(Debug)]
pub struct Gutenberg {
    catalog: Url,
    base: String,
    client: Client,
}

impl Gutenberg {
    /// Build a client from the run configuration.
    ///
    /// Fails if the urls are invalid or if the client can't be built.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let catalog = Url::parse(&config.catalog_url)?;

        // validate base url now rather than on each document
        Url::parse(&config.base_url)?;
        let base = config.base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            catalog,
            base,
            client,
        })
    }

    /// Location of the plain text rendition of a book.
    pub fn document_url(&self, id: BookId) -> Result<Url, Error> {
        Ok(Url::parse(&format!(
            "{base}/cache/epub/{id}/pg{id}.txt",
            base = self.base,
            id = id
        ))?)
    }

    /// fire a blocking request and get the body as text.
    /// Non-success statuses are errors.
    fn get_text(&self, url: Url) -> Result<String, Error> {
        debug!("fetching {}", &url);
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text()?)
    }
}

impl Source for Gutenberg {
    fn catalog(&self) -> Result<String, Error> {
        self.get_text(self.catalog.clone())
    }

    fn document(&self, id: BookId) -> Result<String, Error> {
        let url = self.document_url(id)?;
        self.get_text(url)
    }
}
