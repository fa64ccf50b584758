use std::sync::Arc;

use crate::{internal::Dfa, MatchIterator};

/// A compiled set of patterns.
///
/// The matcher is immutable. It can be cloned cheaply and opened on any number of inputs at the
/// same time, each [MatchIterator] keeps its own scan state.
#[derive(Debug)]
pub struct Matcher<V> {
    automaton: Arc<Dfa<V>>,
}

impl<V> Clone for Matcher<V> {
    fn clone(&self) -> Self {
        Self {
            automaton: Arc::clone(&self.automaton),
        }
    }
}

impl<V> Matcher<V> {
    pub(crate) fn new(automaton: Dfa<V>) -> Self {
        Self {
            automaton: Arc::new(automaton),
        }
    }

    /// Bind the matcher to a stream of characters.
    ///
    /// The stream is read lazily, one character at a time, while matching.
    /// ```
    /// use lexfa::Compiler;
    ///
    /// let mut compiler = Compiler::regex();
    /// compiler.add_pattern("[0-9]+", 'n').unwrap();
    /// let matcher = compiler.compile().unwrap();
    /// let mut iterator = matcher.open("42".chars());
    /// let m = iterator.try_match_next().unwrap();
    /// assert_eq!(*m.value(), 'n');
    /// assert_eq!(m.capture(), "42");
    /// ```
    pub fn open<I>(&self, input: I) -> MatchIterator<V, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        MatchIterator::new(Arc::clone(&self.automaton), input.into_iter())
    }

    /// The number of states of the compiled automaton.
    pub fn state_count(&self) -> usize {
        self.automaton.states().len()
    }

    /// Render the compiled automaton in graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W)
    where
        V: std::fmt::Debug,
    {
        crate::internal::dot::dfa_render(&self.automaton, label, output);
    }
}
