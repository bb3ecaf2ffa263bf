//! Input validation helpers
//!
//! Localized-label validation for the settings editors. Required-field
//! rules are enforced here, before any store call; the store itself
//! accepts whatever it is given.

use std::collections::BTreeMap;

/// Per-field validation errors, keyed by field name (language code for
/// localized labels)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate the three localized label fields of an editor entry.
///
/// All of `ru`, `ro`, `en` must be non-empty before a save is accepted.
pub fn validate_labels(ru: &str, ro: &str, en: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if ru.trim().is_empty() {
        errors.insert("ru", "Required");
    }
    if ro.trim().is_empty() {
        errors.insert("ro", "Required");
    }
    if en.trim().is_empty() {
        errors.insert("en", "Required");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_labels() {
        let errors = validate_labels("Салаты", "", "Salads");
        assert!(!errors.is_empty());
        assert_eq!(errors.get("ro"), Some("Required"));
        assert_eq!(errors.get("ru"), None);

        let errors = validate_labels("Салаты", "Salate", "Salads");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_whitespace_is_empty() {
        let errors = validate_labels("  ", "a", "b");
        assert_eq!(errors.get("ru"), Some("Required"));
    }
}
