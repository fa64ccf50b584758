//! Module with the declarative description of a matcher.
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{Compiler, Dialect, Matcher, Result};

/// A pattern together with the value a match of it yields.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern<V> {
    pattern: String,
    value: V,
}

impl<V> Pattern<V> {
    /// Create a new pattern.
    pub fn new(pattern: impl Into<String>, value: V) -> Self {
        Self {
            pattern: pattern.into(),
            value,
        }
    }

    /// Get the pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V> std::fmt::Display for Pattern<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern.escape_default())
    }
}

/// All patterns of a matcher in one dialect, optionally with a value for the end of the input.
///
/// With the `serde` feature a pattern set can be read from JSON:
/// ```json
/// {
///   "dialect": "regex",
///   "patterns": [
///     { "pattern": "[0-9]+", "value": "Integer" },
///     { "pattern": "\\+", "value": "Plus" }
///   ],
///   "end_of_file": "End"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "V: Deserialize<'de>"))
)]
pub struct PatternSet<V> {
    #[cfg_attr(feature = "serde", serde(default))]
    dialect: Dialect,
    patterns: Vec<Pattern<V>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    end_of_file: Option<V>,
}

impl<V> PatternSet<V> {
    /// Create an empty pattern set.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            patterns: Vec::new(),
            end_of_file: None,
        }
    }

    /// Add a pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>, value: V) -> Self {
        self.patterns.push(Pattern::new(pattern, value));
        self
    }

    /// Set the value of the end of the input.
    pub fn with_end_of_file(mut self, value: V) -> Self {
        self.end_of_file = Some(value);
        self
    }

    /// Get the dialect.
    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Get the patterns.
    #[inline]
    pub fn patterns(&self) -> &[Pattern<V>] {
        &self.patterns
    }

    /// Get the value of the end of the input.
    #[inline]
    pub fn end_of_file(&self) -> Option<&V> {
        self.end_of_file.as_ref()
    }
}

impl<V> PatternSet<V>
where
    V: Clone + PartialEq + Debug,
{
    /// Compile all patterns into a matcher.
    pub fn compile(&self) -> Result<Matcher<V>> {
        let mut compiler = Compiler::new(self.dialect);
        compiler.add_patterns(
            self.patterns
                .iter()
                .map(|pattern| (pattern.pattern(), pattern.value.clone())),
        )?;
        if let Some(value) = &self.end_of_file {
            compiler.add_end_of_file(value.clone());
        }
        compiler.compile()
    }
}

#[cfg(feature = "serde")]
impl<V> PatternSet<V>
where
    V: DeserializeOwned,
{
    /// Read a pattern set from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
