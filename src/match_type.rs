#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A match of one of the patterns at the current position of the input.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match<V> {
    /// The value of the pattern that matched.
    value: V,
    /// The matched text.
    capture: String,
}

impl<V> Match<V> {
    /// Create a new match.
    pub fn new(value: V, capture: String) -> Self {
        Self { value, capture }
    }

    /// Get the value of the pattern that matched.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Get the matched text.
    /// A match of the end of the input has an empty capture.
    #[inline]
    pub fn capture(&self) -> &str {
        &self.capture
    }

    /// Split the match into its value and the matched text.
    #[inline]
    pub fn into_parts(self) -> (V, String) {
        (self.value, self.capture)
    }

    /// Get the length of the match in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.capture.chars().count()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capture.is_empty()
    }
}
