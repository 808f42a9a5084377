//! Book discovery from the catalog page.
//!
//! The catalog lists books in `ul` elements. An element is a French match when its
//! text contains `French` and not `English` (bilingual entries are discarded).
//! The book id is taken from the first link of the element, of the form `/ebooks/<id>`.
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

use crate::error::Error;
use crate::sources::Source;
use crate::types::BookId;

const LANG_MARKER: &str = "French";
const EXCLUDED_MARKER: &str = "English";
const EBOOK_PREFIX: &str = "/ebooks/";

/// Fetch the catalog from `source` and extract French book ids.
///
/// Any failure to get the catalog is returned: there's nothing to do without it.
pub fn discover_ids(source: &impl Source) -> Result<Vec<BookId>, Error> {
    let page = source.catalog()?;
    let ids = parse_catalog(&page)?;
    info!("discovered {} french books", ids.len());
    Ok(ids)
}

/// Extract ids from an HTML catalog page, in document order.
/// Duplicates are kept.
pub fn parse_catalog(page: &str) -> Result<Vec<BookId>, Error> {
    let lists = selector("ul")?;
    let links = selector("a")?;
    let document = Html::parse_document(page);

    let ids = document
        .select(&lists)
        .filter(is_french)
        .filter_map(|item| {
            let href = item.select(&links).next()?.value().attr("href")?;
            match parse_href(href) {
                Some(id) => Some(id),
                None => {
                    debug!("skipping catalog entry with link {:?}", href);
                    None
                }
            }
        })
        .collect();

    Ok(ids)
}

fn selector(s: &str) -> Result<Selector, Error> {
    Selector::parse(s).map_err(|e| Error::Custom(format!("invalid selector {}: {:?}", s, e)))
}

fn is_french(item: &ElementRef) -> bool {
    let text: String = item.text().collect();
    text.contains(LANG_MARKER) && !text.contains(EXCLUDED_MARKER)
}

/// Get the id out of a `/ebooks/<id>` link.
fn parse_href(href: &str) -> Option<BookId> {
    let href = href.trim();
    let id = href
        .strip_prefix(EBOOK_PREFIX)
        .unwrap_or(href)
        .trim_end_matches('/');
    id.parse().ok()
}
