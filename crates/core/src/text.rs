//! Small text helpers for form-style input.

/// Trims a free-text field, mapping blank values to `None`.
///
/// Forms submit empty strings for untouched optional fields.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
