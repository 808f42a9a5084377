//! Book identifiers and sentence records.
use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};

/// Identifier of a book in the Gutenberg catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(u64);

impl BookId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(BookId)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A kept sentence.
///
/// `position` is the index of the sentence in the extractor output of its book,
/// *before* short sentences were discarded. The synthetic timestamp is derived from it,
/// so kept sentences may have gaps between their timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    position: usize,
    sentence: String,
    created_at: NaiveDateTime,
}

impl SentenceRecord {
    /// Build a record whose timestamp is `anchor + position` minutes.
    pub fn new(position: usize, sentence: String, anchor: NaiveDateTime) -> Self {
        let created_at = anchor + Duration::minutes(position as i64);
        Self {
            position,
            sentence,
            created_at,
        }
    }

    /// Get the record's position in its book.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get a reference to the record's sentence.
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Get the record's synthetic creation time.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

/// Sentences kept for a single book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSentences {
    id: BookId,
    records: Vec<SentenceRecord>,
}

impl BookSentences {
    pub fn new(id: BookId, records: Vec<SentenceRecord>) -> Self {
        Self { id, records }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SentenceRecord> {
        self.records
    }
}

/// Concatenated records of all books, in book order.
///
/// Rows are indexed by their position in the concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    rows: Vec<SentenceRecord>,
}

impl OutputTable {
    /// Concatenate books' records, keeping the order of `books`.
    pub fn concat(books: Vec<BookSentences>) -> Self {
        let rows = books
            .into_iter()
            .flat_map(BookSentences::into_records)
            .collect();
        Self { rows }
    }

    /// Iterate over `(index, record)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &SentenceRecord)> {
        self.rows.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn record_timestamp() {
        let r = SentenceRecord::new(5, "foo".to_string(), anchor());
        assert_eq!(r.created_at(), anchor() + Duration::minutes(5));
        assert_eq!(r.position(), 5);
    }

    #[test]
    fn concat_reindexes() {
        let a = BookSentences::new(
            BookId::new(1),
            vec![
                SentenceRecord::new(3, "a".to_string(), anchor()),
                SentenceRecord::new(7, "b".to_string(), anchor()),
            ],
        );
        let b = BookSentences::new(BookId::new(2), Vec::new());
        let c = BookSentences::new(
            BookId::new(3),
            vec![SentenceRecord::new(0, "c".to_string(), anchor())],
        );

        let table = OutputTable::concat(vec![a, b, c]);
        let rows: Vec<(usize, &str)> = table.rows().map(|(i, r)| (i, r.sentence())).collect();
        assert_eq!(rows, vec![(0, "a"), (1, "b"), (2, "c")]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn book_id_parse() {
        assert_eq!("12345".parse::<BookId>(), Ok(BookId::new(12345)));
        assert!("12a".parse::<BookId>().is_err());
        assert_eq!(BookId::new(42).to_string(), "42");
    }
}
