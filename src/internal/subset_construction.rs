//! The subset construction converts an NFA into an equivalent DFA.
//!
//! Sets of NFA states (configurations) become single DFA states. The alphabet is not a finite set
//! of symbols but the range of codepoints, so the outgoing branches of a configuration are first
//! partitioned into disjoint intervals, each one leading to the set of NFA states that all
//! overlapping branches reach.
//!
//! Each configuration is materialized only once. Configurations are identified by their epsilon
//! closure in canonical (sorted) order.

use log::trace;
use rustc_hash::FxHashMap;

use super::{branch::Codepoint, Branch, Dfa, DfaState, Nfa, StateID};

/// More than one distinct value is reachable from the same configuration, i.e. two or more
/// patterns with different values accept the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Collision<V> {
    pub(crate) values: Vec<V>,
}

/// A disjoint output interval together with the NFA states it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Interval {
    pub(crate) begin: Codepoint,
    pub(crate) end: Codepoint,
    pub(crate) targets: Vec<StateID>,
}

/// Converts the part of the NFA reachable from `start` into a DFA.
pub(crate) fn determinize<V>(nfa: &Nfa<V>, start: StateID) -> Result<Dfa<V>, Collision<V>>
where
    V: Clone + PartialEq,
{
    let mut construction = SubsetConstruction::new(nfa);
    let start = construction.get_or_build(nfa.all_targets_of(start))?;
    while let Some((state, configuration)) = construction.work_list.pop() {
        construction.connect(state, &configuration)?;
    }
    trace!(
        "Subset construction created {} DFA states from {} NFA states",
        construction.states.len(),
        nfa.states().len()
    );
    Ok(Dfa::new(construction.states, start))
}

struct SubsetConstruction<'a, V> {
    nfa: &'a Nfa<V>,
    states: Vec<DfaState<V>>,
    // The equivalence records: configuration -> DFA state
    equivalences: FxHashMap<Vec<StateID>, StateID>,
    // DFA states whose branches still have to be built
    work_list: Vec<(StateID, Vec<StateID>)>,
}

impl<'a, V> SubsetConstruction<'a, V>
where
    V: Clone + PartialEq,
{
    fn new(nfa: &'a Nfa<V>) -> Self {
        Self {
            nfa,
            states: Vec::new(),
            equivalences: FxHashMap::default(),
            work_list: Vec::new(),
        }
    }

    /// Return the DFA state of the given closed configuration, creating it if it is new.
    /// A new state is registered before its branches are built so that configurations that loop
    /// back to it resolve to the same state.
    fn get_or_build(&mut self, configuration: Vec<StateID>) -> Result<StateID, Collision<V>> {
        if let Some(state) = self.equivalences.get(&configuration) {
            return Ok(*state);
        }

        let mut values: Vec<V> = Vec::new();
        for value in self.nfa.all_values_of(&configuration) {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }
        if values.len() > 1 {
            return Err(Collision { values });
        }

        let state = StateID::next_of(self.states.len());
        trace!("Add DFA state {}: {:?}", state, configuration);
        self.states.push(DfaState::new(values.pop()));
        self.equivalences.insert(configuration.clone(), state);
        self.work_list.push((state, configuration));
        Ok(state)
    }

    /// Build the branches of a DFA state from the branches of its configuration.
    fn connect(&mut self, state: StateID, configuration: &[StateID]) -> Result<(), Collision<V>> {
        let branches = self.nfa.all_branches_of(configuration);
        for interval in partition(branches) {
            let target_configuration = self.nfa.epsilon_closure(interval.targets);
            let target = self.get_or_build(target_configuration)?;
            self.states[state].add_branch(Branch::new(interval.begin, interval.end, target));
        }
        Ok(())
    }
}

/// Partition possibly overlapping branches into a minimal sorted list of disjoint intervals.
///
/// Every character covered by the input is covered by exactly one output interval, whose targets
/// are the distinct targets of all input branches containing that character.
pub(crate) fn partition(mut branches: Vec<Branch>) -> Vec<Interval> {
    branches.sort_by_key(|branch| branch.begin);
    let mut intervals: Vec<Interval> = Vec::new();
    let mut i = 0;
    while i < branches.len() {
        let branch = branches[i];
        let end;
        let targets;

        if i + 1 >= branches.len() || branch.end < branches[i + 1].begin {
            // No overlap with the next branch, use the branch as is
            end = branch.end;
            targets = vec![branch.target];
            i += 1;
        } else if branch.begin < branches[i + 1].begin {
            // Split off the exclusive left part, the remainder starts with the next branch
            let next_begin = branches[i + 1].begin;
            end = next_begin - 1;
            targets = vec![branch.target];
            branches[i] = Branch::new(next_begin, branch.end, branch.target);
        } else {
            // All branches sharing this start are cut at the lowest end or before the next start
            let mut last = i + 1;
            let mut lowest = branch.end;
            while last < branches.len() && branches[last].begin == branch.begin {
                lowest = lowest.min(branches[last].end);
                last += 1;
            }
            if last < branches.len() {
                lowest = lowest.min(branches[last].begin - 1);
            }
            end = lowest;

            let mut selected: Vec<StateID> = Vec::with_capacity(last - i);
            for overlapping in &branches[i..last] {
                if !selected.contains(&overlapping.target) {
                    selected.push(overlapping.target);
                }
            }
            targets = selected;

            // Remove consumed branches, shift the start of the others behind the selection
            for k in (i..last).rev() {
                if branches[k].end <= end {
                    branches.remove(k);
                } else {
                    branches[k] = Branch::new(end + 1, branches[k].end, branches[k].target);
                }
            }
        }

        intervals.push(Interval {
            begin: branch.begin,
            end,
            targets,
        });
    }
    intervals
}
