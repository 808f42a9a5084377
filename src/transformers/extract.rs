//! Sentence extraction from a raw book text.
use super::{Normalize, Transform, TrimPolicy};

/// characters stripped at both ends of each sentence.
const STRIPPED: &[char] = &[' ', '-', '"'];

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    normalize: Normalize,
    trim: TrimPolicy,
}

impl Extractor {
    pub fn new(trim: TrimPolicy) -> Self {
        Self {
            normalize: Normalize,
            trim,
        }
    }

    /// Get the extractor's boilerplate trim policy.
    pub fn trim(&self) -> &TrimPolicy {
        &self.trim
    }

    /// Extract cleaned sentences from `raw`, in order of appearance.
    ///
    /// Units that are blank, or that only contain stripped characters, are discarded.
    /// Texts too short for the trim policy yield no sentences.
    pub fn extract(&self, raw: &str) -> Vec<String> {
        let text = self.normalize.transform_own(raw.to_string());
        let units: Vec<&str> = text.split(is_terminal).collect();

        self.trim
            .transform_own(units)
            .into_iter()
            .filter(|unit| !unit.trim().is_empty())
            .map(|unit| unit.trim_matches(STRIPPED))
            .filter(|sentence| !sentence.is_empty())
            .map(String::from)
            .collect()
    }
}
