//! This module contains the NFA (Non-deterministic Finite Automaton) implementation.
//! All patterns of one compiler are threaded onto a single NFA which is later converted to a DFA
//! (Deterministic Finite Automaton) by the subset construction.
//!
//! States live in a flat arena and reference each other by [StateID], so epsilon cycles created
//! by unbounded repetitions are plain edges.

use super::{branch::Codepoint, Branch, StateID};

#[derive(Debug, Clone)]
pub(crate) struct Nfa<V> {
    states: Vec<NfaState<V>>,
}

impl<V> Default for Nfa<V> {
    fn default() -> Self {
        Self { states: Vec::new() }
    }
}

impl<V> Nfa<V> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn states(&self) -> &[NfaState<V>] {
        &self.states
    }

    /// Add a state without a value and return its id.
    pub(crate) fn push_empty(&mut self) -> StateID {
        self.push(NfaState::new(None))
    }

    /// Add an accepting state that carries the given value and return its id.
    pub(crate) fn push_value(&mut self, value: V) -> StateID {
        self.push(NfaState::new(Some(value)))
    }

    fn push(&mut self, state: NfaState<V>) -> StateID {
        let id = StateID::next_of(self.states.len());
        self.states.push(state);
        id
    }

    /// Add a transition on the inclusive character range `begin..=end`.
    pub(crate) fn branch(&mut self, from: StateID, begin: Codepoint, end: Codepoint, to: StateID) {
        self.states[from].branches.push(Branch::new(begin, end, to));
    }

    /// Add an epsilon transition. Self loops are ignored.
    pub(crate) fn epsilon(&mut self, from: StateID, to: StateID) {
        if from == to {
            return;
        }
        let epsilons = &mut self.states[from].epsilons;
        if !epsilons.contains(&to) {
            epsilons.push(to);
        }
    }

    /// Calculate the epsilon closure of a state, the state itself included.
    pub(crate) fn all_targets_of(&self, state: StateID) -> Vec<StateID> {
        self.epsilon_closure(std::iter::once(state))
    }

    /// Calculate the epsilon closure of a set of states and return the unique states in ascending
    /// order. The sorted form serves as the canonical key of the configuration.
    pub(crate) fn epsilon_closure<I>(&self, states: I) -> Vec<StateID>
    where
        I: IntoIterator<Item = StateID>,
    {
        let mut closure: Vec<StateID> = Vec::new();
        for state in states {
            if !closure.contains(&state) {
                closure.push(state);
            }
        }
        let mut i = 0;
        while i < closure.len() {
            let current_state = closure[i];
            for target in &self.states[current_state].epsilons {
                if !closure.contains(target) {
                    closure.push(*target);
                }
            }
            i += 1;
        }
        closure.sort_unstable();
        closure
    }

    /// All character branches leaving the given closure.
    pub(crate) fn all_branches_of(&self, closure: &[StateID]) -> Vec<Branch> {
        closure
            .iter()
            .flat_map(|state| self.states[*state].branches.iter().copied())
            .collect()
    }

    /// All values carried by the states of the given closure.
    pub(crate) fn all_values_of<'a>(&'a self, closure: &'a [StateID]) -> impl Iterator<Item = &'a V> {
        closure
            .iter()
            .filter_map(|state| self.states[*state].value.as_ref())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NfaState<V> {
    branches: Vec<Branch>,
    epsilons: Vec<StateID>,
    value: Option<V>,
}

impl<V> NfaState<V> {
    fn new(value: Option<V>) -> Self {
        Self {
            branches: Vec::new(),
            epsilons: Vec::new(),
            value,
        }
    }

    pub(crate) fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub(crate) fn epsilons(&self) -> &[StateID] {
        &self.epsilons
    }

    pub(crate) fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}
