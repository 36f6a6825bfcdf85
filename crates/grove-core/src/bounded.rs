//! Bounded-length owned strings with an explicit truncate-on-overflow contract.
//!
//! Node names and string payloads in a grove tree are capped at a fixed number
//! of visible characters (`char`s, not bytes). Writes past the cap silently
//! truncate; they never fail and never split a multi-byte character. This
//! keeps node memory predictable and makes over-length input a documented
//! lossy operation rather than an error.

use std::fmt;

/// Maximum visible characters in a node name.
pub const NAME_CAPACITY: usize = 27;

/// Maximum visible characters in a string payload.
pub const STRING_CAPACITY: usize = 63;

/// An owned string that holds at most `CAP` characters.
///
/// All write paths truncate at the capacity (respecting UTF-8 boundaries) and
/// report whether the input fit. Reading always yields a valid `&str` of at
/// most `CAP` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedString<const CAP: usize> {
    inner: String,
}

impl<const CAP: usize> BoundedString<CAP> {
    /// Capacity in visible characters, not bytes.
    pub const CAPACITY: usize = CAP;

    /// Create an empty bounded string.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Create from `source`, truncating to the capacity if needed.
    pub fn from_str_lossy(source: &str) -> Self {
        let mut bounded = Self::new();
        bounded.set(source);
        bounded
    }

    /// Replace the contents with `source`, truncating at the capacity.
    ///
    /// Returns `true` if the whole input fit, `false` if it was truncated.
    pub fn set(&mut self, source: &str) -> bool {
        self.set_bounded(source, CAP)
    }

    /// Replace the contents with at most `max_len` characters of `source`,
    /// further capped at the type's capacity.
    ///
    /// Returns `true` if the whole input fit, `false` if it was truncated.
    pub fn set_bounded(&mut self, source: &str, max_len: usize) -> bool {
        let limit = max_len.min(CAP);
        self.inner.clear();
        for (taken, ch) in source.chars().enumerate() {
            if taken >= limit {
                return false;
            }
            self.inner.push(ch);
        }
        true
    }

    /// View the contents as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Number of characters currently held.
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    /// `true` if no characters are held.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reset to the empty string.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<const CAP: usize> fmt::Display for BoundedString<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl<const CAP: usize> PartialEq<str> for BoundedString<CAP> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl<const CAP: usize> PartialEq<&str> for BoundedString<CAP> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl<const CAP: usize> AsRef<str> for BoundedString<CAP> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_within_capacity_reports_fit() {
        let mut s = BoundedString::<8>::new();
        assert!(s.set("hello"));
        assert_eq!(s.as_str(), "hello");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn set_past_capacity_truncates() {
        let mut s = BoundedString::<4>::new();
        assert!(!s.set("overflow"));
        assert_eq!(s.as_str(), "over");
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // Four 2-byte characters fit in a 4-char capacity.
        let mut s = BoundedString::<4>::new();
        assert!(s.set("\u{e9}\u{e9}\u{e9}\u{e9}"));
        assert_eq!(s.len(), 4);
        assert!(!s.set("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"));
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn set_bounded_uses_smaller_limit() {
        let mut s = BoundedString::<16>::new();
        assert!(!s.set_bounded("truncate me", 8));
        assert_eq!(s.as_str(), "truncate");
    }

    #[test]
    fn empty_input_clears() {
        let mut s = BoundedString::<8>::from_str_lossy("full");
        assert!(s.set(""));
        assert!(s.is_empty());
    }
}
