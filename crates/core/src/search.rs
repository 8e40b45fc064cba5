//! Case-insensitive substring search used by the list filters.

/// A normalized (trimmed, lowercased) search term.
///
/// Blank input never produces a term, so "no search" and "empty search"
/// behave the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Parses a raw query value.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// Returns true if `haystack` contains the term, ignoring case.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// Returns true if any of the fields contains the term.
    #[must_use]
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        fields.into_iter().any(|field| self.matches(field))
    }

    /// The normalized term.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
