//! Emptiness rules for caller-supplied list filters.
//!
//! An empty filter means "no filtering", which is different from a filter
//! that matches nothing. String fields are blank when absent or whitespace;
//! value-typed fields are blank only when unset, so `Some(0)` still filters.

/// A per-entity set of optional search constraints.
pub trait ListFilter {
    /// Returns `true` when no field carries a constraint.
    fn is_empty(&self) -> bool;
}

impl<F: ListFilter> ListFilter for Option<F> {
    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(ListFilter::is_empty)
    }
}

/// `true` for `None`, `""` and whitespace-only strings.
pub fn is_blank(value: &Option<String>) -> bool {
    non_blank(value).is_none()
}

/// Trimmed value of a string field, or `None` when it is blank.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// `LIKE` pattern matching the trimmed value anywhere in a column.
pub fn contains_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
