//! Replaces known stray characters with plain spaces.
use super::Transform;

/// Artifacts found in Gutenberg plain text files, replaced in this order.
/// The last one is a mis-decoded em dash followed by a thin space.
const ARTIFACTS: [&str; 4] = ["\r\n", "\u{202f}", "\u{a0}", "\u{e2}\u{20ac}\u{201d}\u{2009}"];

#[derive(Debug, Clone, Default)]
pub struct Normalize;

impl Transform<String> for Normalize {
    fn transform_own(&self, text: String) -> String {
        let text = ARTIFACTS
            .iter()
            .fold(text, |text, artifact| text.replace(artifact, " "));

        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifacts() {
        let text = "  Il était\r\nune fois\u{a0}: un\u{202f}roi\u{e2}\u{20ac}\u{201d}\u{2009}seul.\r\n".to_string();
        let n = Normalize.transform_own(text);
        assert_eq!(n, "Il était une fois : un roi seul.");
    }

    #[test]
    fn lone_newlines_kept() {
        let n = Normalize.transform_own("foo\nbar".to_string());
        assert_eq!(n, "foo\nbar");
    }
}
