//! Keyword containment helpers shared by the table-driven stages.

/// Lowercased text that keyword tables are matched against.
///
/// Keyword tables store lowercase entries, so English matching is
/// case-insensitive while CJK text passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBuffer(String);

impl SearchBuffer {
    /// Builds a buffer from one piece of text.
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// Builds a buffer from several pieces joined by a single space.
    pub fn joined<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = parts.into_iter().collect::<Vec<_>>().join(" ");
        Self::new(&joined)
    }

    /// Returns true if any keyword occurs as a substring.
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        contains_any(&self.0, keywords)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true if any of `keywords` is a substring of `haystack`.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
