//! Sentence records creation.
use chrono::NaiveDateTime;

use super::dedup::dedup_records;
use crate::filtering::{Filter, WordCount};
use crate::types::SentenceRecord;

/// Build the records of a book from its extracted sentences.
///
/// Each sentence is timestamped `anchor + i` minutes, `i` being its position in `sentences`.
/// Short sentences are then discarded (timestamps are not renumbered), and duplicates removed.
pub fn filter_and_timestamp(
    sentences: Vec<String>,
    anchor: NaiveDateTime,
    filter: &WordCount,
) -> Vec<SentenceRecord> {
    let records = sentences
        .into_iter()
        .enumerate()
        .filter(|(_, sentence)| filter.detect(sentence.as_str()))
        .map(|(position, sentence)| SentenceRecord::new(position, sentence, anchor))
        .collect();

    dedup_records(records)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::filtering::word_count;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 12)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 123_456)
            .unwrap()
    }

    fn sentences(s: &[&str]) -> Vec<String> {
        s.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn timestamps_by_extraction_position() {
        let s = sentences(&[
            "une phrase de plus de cinq mots",
            "deux phrases de plus de cinq mots",
            "trois phrases de plus de cinq mots",
            "trop court",
            "encore trop court",
            "cinq phrases de plus de cinq mots",
        ]);

        let records = filter_and_timestamp(s, anchor(), &WordCount::default());
        let offsets: Vec<i64> = records
            .iter()
            .map(|r| (r.created_at() - anchor()).num_minutes())
            .collect();
        assert_eq!(offsets, vec![0, 1, 2, 5]);
        assert_eq!(records[3].created_at(), anchor() + Duration::minutes(5));
    }

    #[test]
    fn strictly_increasing() {
        let s: Vec<String> = (0..100)
            .map(|i| {
                if i % 3 == 0 {
                    format!("court {}", i)
                } else {
                    format!("la phrase numéro {} est assez longue", i)
                }
            })
            .collect();

        let records = filter_and_timestamp(s, anchor(), &WordCount::default());
        assert!(records
            .windows(2)
            .all(|w| w[0].created_at() < w[1].created_at()));
        assert!(records.iter().all(|r| word_count(r.sentence()) > 5));
    }

    #[test]
    fn duplicates_keep_first() {
        let s = sentences(&[
            "Je pense donc je suis moi",
            "Un autre exemple de phrase longue",
            "Je pense donc je suis moi",
        ]);

        let records = filter_and_timestamp(s, anchor(), &WordCount::default());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].position(), 0);
        assert_eq!(records[1].position(), 1);
    }

    #[test]
    fn empty() {
        assert!(filter_and_timestamp(Vec::new(), anchor(), &WordCount::default()).is_empty());
    }
}
