/*! Deduplication

This uses [runiq](https://github.com/whitfin/runiq) to check for identical sentences.
The first occurrence of a sentence is kept, along with its timestamp.
!*/
use log::debug;
use runiq::filters::{DigestFilter, Filter};

use crate::types::SentenceRecord;

/// deduplicates records of a single book.
pub fn dedup_records(records: Vec<SentenceRecord>) -> Vec<SentenceRecord> {
    let mut filter = DigestFilter::default();
    let nb_records = records.len();

    let kept: Vec<SentenceRecord> = records
        .into_iter()
        .filter(|record| filter.detect(record.sentence().as_bytes()))
        .collect();

    debug!("removed {} duplicates", nb_records - kept.len());
    kept
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn records(sentences: &[&str]) -> Vec<SentenceRecord> {
        sentences
            .iter()
            .enumerate()
            .map(|(idx, s)| SentenceRecord::new(idx, s.to_string(), anchor()))
            .collect()
    }

    #[test]
    fn test_dedup_records() {
        let r = records(&["hello", "how are you?", "goodbye!", "hello", "goodbye!"]);
        let kept = dedup_records(r);

        let sentences: Vec<&str> = kept.iter().map(|r| r.sentence()).collect();
        let positions: Vec<usize> = kept.iter().map(|r| r.position()).collect();
        assert_eq!(sentences, vec!["hello", "how are you?", "goodbye!"]);
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_dedup_exact_only() {
        let r = records(&["Hello", "hello", "hello "]);
        assert_eq!(dedup_records(r).len(), 3);
    }
}
