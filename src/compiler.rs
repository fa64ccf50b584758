use std::fmt::Debug;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    internal::{
        branch::END_OF_STREAM, glob_parser::parse_glob, regex_parser::parse_regex,
        subset_construction::determinize, Nfa, Node, StateID,
    },
    LexfaError, LexfaErrorKind, Matcher, Result,
};

/// The syntax of the patterns added to a [Compiler].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// Regular expressions with `|`, groups, classes and the quantifiers `* + ? {m,n}`.
    #[default]
    Regex,
    /// Globs with `*`, `?` and classes.
    Glob,
}

impl Dialect {
    fn parse(self, pattern: &str) -> Result<Node> {
        match self {
            Dialect::Regex => parse_regex(pattern),
            Dialect::Glob => parse_glob(pattern),
        }
    }
}

/// The maximum number of NFA states of one compiler.
pub(crate) const MAX_NFA_STATES: usize = 1 << 20;

/// Collects patterns with their values and compiles them into a single [Matcher].
///
/// ```
/// use lexfa::Compiler;
///
/// let mut compiler = Compiler::glob();
/// compiler.add_pattern("*.rs", "rust")?.add_pattern("*.toml", "toml")?;
/// let matcher = compiler.compile()?;
/// let m = matcher.open("Cargo.toml".chars()).try_match_next().unwrap();
/// assert_eq!(*m.value(), "toml");
/// # Ok::<(), lexfa::LexfaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Compiler<V> {
    dialect: Dialect,
    nfa: Nfa<V>,
    start: StateID,
    pattern_count: usize,
}

impl<V> Compiler<V> {
    /// Create a compiler for patterns of the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        let mut nfa = Nfa::new();
        let start = nfa.push_empty();
        Self {
            dialect,
            nfa,
            start,
            pattern_count: 0,
        }
    }

    /// Create a compiler for regular expressions.
    pub fn regex() -> Self {
        Self::new(Dialect::Regex)
    }

    /// Create a compiler for globs.
    pub fn glob() -> Self {
        Self::new(Dialect::Glob)
    }

    /// The dialect of the patterns.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Add a pattern that yields `value` when it matches.
    ///
    /// The pattern is parsed right away. On a syntax error, or if the pattern would grow the
    /// automaton beyond its size limit, nothing is added and the compiler stays usable.
    pub fn add_pattern(&mut self, pattern: &str, value: V) -> Result<&mut Self> {
        let node = self.dialect.parse(pattern)?;

        // The pattern adds an entry and an accepting state around its own states
        let fits = node
            .state_count()
            .and_then(|count| count.checked_add(self.nfa.states().len() + 2))
            .is_some_and(|total| total <= MAX_NFA_STATES);
        if !fits {
            return Err(LexfaError::new(LexfaErrorKind::SizeLimitExceeded {
                limit: MAX_NFA_STATES,
            }));
        }

        let entry = self.nfa.push_empty();
        self.nfa.epsilon(self.start, entry);
        let end = node.connect_to(&mut self.nfa, entry);
        let accept = self.nfa.push_value(value);
        self.nfa.epsilon(end, accept);

        self.pattern_count += 1;
        debug!(
            "Added {:?} pattern #{} '{}', NFA has {} states",
            self.dialect,
            self.pattern_count,
            pattern.escape_default(),
            self.nfa.states().len()
        );
        Ok(self)
    }

    /// Add several patterns, stopping at the first syntax error.
    pub fn add_patterns<I, P>(&mut self, patterns: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
    {
        for (pattern, value) in patterns {
            self.add_pattern(pattern.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Match the end of the input with the given value.
    ///
    /// Without it, scanning simply stops with no match at the end of the input.
    pub fn add_end_of_file(&mut self, value: V) -> &mut Self {
        let accept = self.nfa.push_value(value);
        self.nfa
            .branch(self.start, END_OF_STREAM, END_OF_STREAM, accept);
        debug!("Added end of file match");
        self
    }
}

impl<V> Compiler<V>
where
    V: Clone + PartialEq + Debug,
{
    /// Build the matcher for all patterns added so far.
    ///
    /// Fails if patterns with different values accept the same input.
    pub fn compile(&self) -> Result<Matcher<V>> {
        let dfa = determinize(&self.nfa, self.start).map_err(|collision| {
            LexfaError::new(LexfaErrorKind::Ambiguity(
                collision
                    .values
                    .iter()
                    .map(|value| format!("{:?}", value))
                    .collect(),
            ))
        })?;
        debug!(
            "Compiled {} patterns: {} NFA states, {} DFA states",
            self.pattern_count,
            self.nfa.states().len(),
            dfa.states().len()
        );
        Ok(Matcher::new(dfa))
    }
}
