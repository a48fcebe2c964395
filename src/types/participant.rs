//! Participant identity.
//!
//! A participant is an opaque string label. Identity is exact string
//! equality: two participants are the same participant if and only if their
//! labels are equal. Labels must be unique within a roster; duplicates are
//! rejected when the [`Roster`](crate::roster::Roster) is built.

use std::fmt;

/// A participant in the gift exchange, identified by an opaque label.
///
/// ## Example
///
/// ```
/// use santa_match::types::Participant;
///
/// let alice = Participant::new("Alice");
/// assert_eq!(alice.name(), "Alice");
/// assert_eq!(alice, Participant::new("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Participant(String);

impl Participant {
    /// Create a participant from a label.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The participant's label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_exact_label_equality() {
        assert_eq!(Participant::new("Alice"), Participant::new("Alice"));
        assert_ne!(Participant::new("Alice"), Participant::new("alice"));
        assert_ne!(Participant::new("Alice"), Participant::new("Alice "));
    }

    #[test]
    fn test_display_is_the_label() {
        let p = Participant::new("Bob");
        assert_eq!(p.to_string(), "Bob");
    }

    #[test]
    fn test_from_conversions() {
        let a: Participant = "Carol".into();
        let b: Participant = String::from("Carol").into();
        assert_eq!(a, b);
    }
}
