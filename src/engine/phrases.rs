//! Phrase List - validated phrase input for the typewriter engine.
//!
//! Phrases arrive as a JSON-encoded array of strings (the host attaches them
//! as configuration). Absence, malformed JSON, a non-array value, and an
//! empty array all silently fall back to the default list - phrase input is
//! never a fatal error.

/// Fallback phrases used when no valid phrase configuration is supplied.
pub const DEFAULT_PHRASES: [&str; 3] = ["Web Developer.", "Student.", "Competitive Programmer."];

/// Ordered, non-empty list of phrases. Immutable for the engine's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    /// Build from a vector of phrases.
    ///
    /// An empty vector falls back to [`DEFAULT_PHRASES`]; the resulting list
    /// is always non-empty.
    pub fn new(phrases: Vec<String>) -> Self {
        if phrases.is_empty() {
            Self::default()
        } else {
            Self { phrases }
        }
    }

    /// Parse a JSON-encoded array of strings.
    ///
    /// `None`, malformed JSON, a non-array value, and an empty array all
    /// fall back to the default list. Never fails loudly.
    pub fn from_json(raw: Option<&str>) -> Self {
        match raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok()) {
            Some(phrases) if !phrases.is_empty() => Self { phrases },
            _ => Self::default(),
        }
    }

    /// Number of phrases. Always at least 1.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// A phrase list is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the phrase at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. The engine only ever indexes with a
    /// wrapped word index, so this holds by construction.
    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index]
    }

    /// The first phrase (rendered statically in reduced-motion mode).
    pub fn first(&self) -> &str {
        &self.phrases[0]
    }

    /// Character count (not byte length) of the phrase at `index`.
    pub fn char_count(&self, index: usize) -> usize {
        self.phrases[index].chars().count()
    }
}

impl Default for PhraseList {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_valid() {
        let list = PhraseList::from_json(Some(r#"["Go.", "Rust."]"#));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), "Go.");
        assert_eq!(list.get(1), "Rust.");
    }

    #[test]
    fn test_from_json_absent_falls_back() {
        let list = PhraseList::from_json(None);
        assert_eq!(list.len(), DEFAULT_PHRASES.len());
        assert_eq!(list.first(), DEFAULT_PHRASES[0]);
    }

    #[test]
    fn test_from_json_malformed_falls_back() {
        let list = PhraseList::from_json(Some("not json at all"));
        assert_eq!(list.first(), DEFAULT_PHRASES[0]);
    }

    #[test]
    fn test_from_json_non_array_falls_back() {
        let list = PhraseList::from_json(Some(r#"{"words": ["a"]}"#));
        assert_eq!(list.first(), DEFAULT_PHRASES[0]);

        let list = PhraseList::from_json(Some(r#""just a string""#));
        assert_eq!(list.first(), DEFAULT_PHRASES[0]);
    }

    #[test]
    fn test_from_json_empty_array_falls_back() {
        let list = PhraseList::from_json(Some("[]"));
        assert_eq!(list.len(), DEFAULT_PHRASES.len());
    }

    #[test]
    fn test_new_empty_falls_back() {
        let list = PhraseList::new(vec![]);
        assert_eq!(list.len(), DEFAULT_PHRASES.len());
    }

    #[test]
    fn test_never_empty() {
        assert!(!PhraseList::default().is_empty());
        assert!(!PhraseList::from_json(Some("[]")).is_empty());
    }

    #[test]
    fn test_char_count_multibyte() {
        let list = PhraseList::new(vec!["héllo 世界".to_string()]);
        assert_eq!(list.char_count(0), 8);
    }
}
