//! Estates Domain Concerns

pub mod buildings;
pub mod people;

/// A field is blank when it is empty. Whitespace counts as a value.
pub(crate) fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// Drop optional text that is blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !is_blank(value))
}
