/// The base type of state ids.
pub(crate) type StateIDBase = u32;

/// The ID type for automata states. Used in NFA and DFA.
///
/// A state id is the index of the state in the arena of the automaton that owns it. Edges between
/// states are stored as ids, so cyclic graphs never create cyclic ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub(crate) struct StateID(StateIDBase);

impl StateID {
    /// Create a new id.
    #[inline]
    pub(crate) const fn new(index: StateIDBase) -> Self {
        StateID(index)
    }

    /// Create the id of the state that will be pushed onto an arena of the given length.
    #[inline]
    pub(crate) fn next_of(len: usize) -> Self {
        assert!(len <= StateIDBase::MAX as usize, "state arena overflow");
        StateID(len as StateIDBase)
    }

    /// Get the id as usize.
    #[inline]
    pub(crate) fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl<T> std::ops::Index<StateID> for [T] {
    type Output = T;

    #[inline]
    fn index(&self, index: StateID) -> &Self::Output {
        &self[index.as_usize()]
    }
}

impl<T> std::ops::Index<StateID> for Vec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: StateID) -> &Self::Output {
        &self[index.as_usize()]
    }
}

impl<T> std::ops::IndexMut<StateID> for Vec<T> {
    #[inline]
    fn index_mut(&mut self, index: StateID) -> &mut T {
        &mut self[index.as_usize()]
    }
}

impl std::fmt::Display for StateID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StateIDBase> for StateID {
    fn from(index: StateIDBase) -> Self {
        StateID::new(index)
    }
}
