//! This module contains the DFA implementation.
//! The DFA is used to match the input against all patterns at once.
//! It is created from the NFA by the subset construction in
//! [crate::internal::subset_construction].

use super::{branch::Codepoint, Branch, StateID};

/// A deterministic automaton.
///
/// Each state has at most one transition per character. The automaton is immutable after the
/// subset construction has finished and can be shared by any number of match iterators.
#[derive(Debug, Clone)]
pub(crate) struct Dfa<V> {
    states: Vec<DfaState<V>>,
    start: StateID,
}

impl<V> Dfa<V> {
    pub(crate) fn new(states: Vec<DfaState<V>>, start: StateID) -> Self {
        debug_assert!(start.as_usize() < states.len());
        Self { states, start }
    }

    #[inline]
    pub(crate) fn start(&self) -> StateID {
        self.start
    }

    pub(crate) fn states(&self) -> &[DfaState<V>] {
        &self.states
    }

    /// Follow the transition of the given state on the given character, if any.
    #[inline]
    pub(crate) fn follow(&self, current: StateID, codepoint: Codepoint) -> Option<StateID> {
        self.states[current].follow(codepoint)
    }

    /// The value of the given state if it is an accepting state.
    #[inline]
    pub(crate) fn value(&self, state: StateID) -> Option<&V> {
        self.states[state].value.as_ref()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DfaState<V> {
    // Sorted by range start, ranges never overlap
    branches: Vec<Branch>,
    value: Option<V>,
}

impl<V> DfaState<V> {
    pub(crate) fn new(value: Option<V>) -> Self {
        Self {
            branches: Vec::new(),
            value,
        }
    }

    pub(crate) fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub(crate) fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Append a branch. Branches must be added in ascending order and must not overlap.
    ///
    /// # Panics
    /// An overlapping or out of order branch is an internal inconsistency of the subset
    /// construction and panics.
    pub(crate) fn add_branch(&mut self, branch: Branch) {
        if let Some(last) = self.branches.last() {
            assert!(
                last.end < branch.begin,
                "range overlap: {}..={} after {}..={}",
                branch.begin,
                branch.end,
                last.begin,
                last.end
            );
        }
        self.branches.push(branch);
    }

    fn follow(&self, codepoint: Codepoint) -> Option<StateID> {
        let index = self
            .branches
            .partition_point(|branch| branch.begin <= codepoint);
        if index == 0 {
            return None;
        }
        let branch = &self.branches[index - 1];
        branch.contains(codepoint).then_some(branch.target)
    }
}
