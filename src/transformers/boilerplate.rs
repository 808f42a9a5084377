//! Removes front and back matter by position.
//!
//! Gutenberg texts start with a header (title page, license notice) and end with the
//! full license. Both are dropped by discarding a fixed number of units at each end.
//!
//! ```text
//! [ head units | kept units | tail units ]
//! ```
//!
//! Documents that have `head + tail` units or less are emptied.
use super::Transform;

pub const HEAD: usize = 50;
pub const TAIL: usize = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimPolicy {
    head: usize,
    tail: usize,
}

impl TrimPolicy {
    pub fn new(head: usize, tail: usize) -> Self {
        Self { head, tail }
    }

    /// Get the number of units removed at the start.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Get the number of units removed at the end.
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Kept range on a sequence of `len` units, empty if the sequence is too short.
    pub fn kept(&self, len: usize) -> std::ops::Range<usize> {
        match len.checked_sub(self.tail) {
            Some(end) if end > self.head => self.head..end,
            _ => 0..0,
        }
    }
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self {
            head: HEAD,
            tail: TAIL,
        }
    }
}

impl<'a> Transform<Vec<&'a str>> for TrimPolicy {
    fn transform_own(&self, mut units: Vec<&'a str>) -> Vec<&'a str> {
        let kept = self.kept(units.len());
        units.truncate(kept.end);
        units.drain(..kept.start);
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(nb: usize) -> Vec<String> {
        (0..nb).map(|i| format!("unit {}", i)).collect()
    }

    #[test]
    fn default_policy() {
        let t = TrimPolicy::default();
        assert_eq!(t.head(), 50);
        assert_eq!(t.tail(), 700);
    }

    #[test]
    fn trim() {
        let u = units(10);
        let u: Vec<&str> = u.iter().map(String::as_str).collect();
        let t = TrimPolicy::new(2, 3);
        assert_eq!(
            t.transform_own(u),
            vec!["unit 2", "unit 3", "unit 4", "unit 5", "unit 6"]
        );
    }

    #[test]
    fn too_short() {
        let t = TrimPolicy::default();
        for nb in [0, 1, 50, 700, 749, 750] {
            let u = units(nb);
            let u: Vec<&str> = u.iter().map(String::as_str).collect();
            assert!(t.transform_own(u).is_empty(), "{} units", nb);
        }

        let u = units(751);
        let u: Vec<&str> = u.iter().map(String::as_str).collect();
        assert_eq!(t.transform_own(u), vec!["unit 50"]);
    }

    #[test]
    fn no_trim() {
        let t = TrimPolicy::new(0, 0);
        assert_eq!(t.transform_own(vec!["a", "b"]), vec!["a", "b"]);
        assert!(t.transform_own(Vec::new()).is_empty());
    }
}
