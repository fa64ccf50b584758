//! The syntax tree of a parsed pattern and its lowering onto an NFA.

use super::{branch::CharacterRange, Nfa, StateID};

/// A node of the syntax tree of a pattern.
///
/// The tree only lives between parsing and lowering. The constructors collapse nodes that would
/// not change the accepted language so the lowering creates fewer states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    /// Exactly one character out of the given ranges.
    Character(Vec<CharacterRange>),
    /// All children one after the other.
    Sequence(Vec<Node>),
    /// Any one of the children.
    Alternative(Vec<Node>),
    /// The child repeated at least `min` and at most `max` times, `None` meaning unbounded.
    Repeat {
        child: Box<Node>,
        min: usize,
        max: Option<usize>,
    },
}

impl Node {
    pub(crate) fn character(c: char) -> Self {
        Node::Character(vec![CharacterRange::single(c)])
    }

    pub(crate) fn any() -> Self {
        Node::Character(vec![CharacterRange::any()])
    }

    pub(crate) fn sequence(mut children: Vec<Node>) -> Self {
        if children.len() == 1 {
            children.remove(0)
        } else {
            Node::Sequence(children)
        }
    }

    pub(crate) fn alternative(mut children: Vec<Node>) -> Self {
        if children.len() == 1 {
            children.remove(0)
        } else {
            Node::Alternative(children)
        }
    }

    pub(crate) fn repeat(child: Node, min: usize, max: Option<usize>) -> Self {
        debug_assert!(max.map_or(true, |max| min <= max));
        if min == 1 && max == Some(1) {
            child
        } else {
            Node::Repeat {
                child: Box::new(child),
                min,
                max,
            }
        }
    }

    /// The number of NFA states [Node::connect_to] creates for this node, `None` if it doesn't
    /// fit into `usize`.
    pub(crate) fn state_count(&self) -> Option<usize> {
        match self {
            Node::Character(_) => Some(1),
            Node::Sequence(children) => children
                .iter()
                .try_fold(0usize, |sum, child| sum.checked_add(child.state_count()?)),
            Node::Alternative(children) => children
                .iter()
                .try_fold(1usize, |sum, child| sum.checked_add(child.state_count()?)),
            Node::Repeat { child, min, max } => {
                let child = child.state_count()?;
                let repeated = match max {
                    Some(max) => max.checked_mul(child)?,
                    None => min.checked_mul(child)?.checked_add(child)?.checked_add(1)?,
                };
                repeated.checked_add(1)
            }
        }
    }

    /// Thread the node onto the NFA starting at `parent` and return the state reached after the
    /// node has been matched.
    pub(crate) fn connect_to<V>(&self, nfa: &mut Nfa<V>, parent: StateID) -> StateID {
        match self {
            Node::Character(ranges) => {
                // parent --[ranges]--> next
                let next = nfa.push_empty();
                for range in ranges {
                    nfa.branch(parent, range.begin, range.end, next);
                }
                next
            }
            Node::Sequence(children) => children
                .iter()
                .fold(parent, |state, child| child.connect_to(nfa, state)),
            Node::Alternative(children) => {
                // Every child starts at parent and ends in next
                let next = nfa.push_empty();
                for child in children {
                    let end = child.connect_to(nfa, parent);
                    nfa.epsilon(end, next);
                }
                next
            }
            Node::Repeat { child, min, max } => {
                let mut parent = parent;
                for _ in 0..*min {
                    parent = child.connect_to(nfa, parent);
                }

                let next = nfa.push_empty();
                nfa.epsilon(parent, next);

                match max {
                    Some(max) => {
                        for _ in *min..*max {
                            parent = child.connect_to(nfa, parent);
                            nfa.epsilon(parent, next);
                        }
                    }
                    None => {
                        // The loop gets its own entry so that looping back never re-enters
                        // whatever else is attached to parent
                        let entry = nfa.push_empty();
                        nfa.epsilon(parent, entry);
                        let end = child.connect_to(nfa, entry);
                        nfa.epsilon(end, entry);
                        nfa.epsilon(end, next);
                    }
                }
                next
            }
        }
    }
}
