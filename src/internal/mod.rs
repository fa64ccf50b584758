/// Module with the regex and glob tokenizers.
pub(crate) mod bootstrap;

/// Module with the character alphabet and transitions.
pub(crate) mod branch;
pub(crate) use branch::Branch;

/// Module that provides functions and types related to DFAs.
pub(crate) mod dfa;
pub(crate) use dfa::{Dfa, DfaState};

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module with the glob parser.
pub(crate) mod glob_parser;

/// Module for the state id type.
mod ids;
pub(crate) use ids::StateID;

/// Module with the lexemes of the pattern tokenizers.
mod lexeme;
pub(crate) use lexeme::{Lexeme, LexemeKind};

/// The nfa module contains the NFA implementation.
mod nfa;
pub(crate) use nfa::Nfa;

/// Module with the syntax tree of patterns.
mod node;
pub(crate) use node::Node;

/// Module with the parts shared by both pattern parsers.
pub(crate) mod parser;

/// The regex_parser module contains the regex syntax parser.
pub(crate) mod regex_parser;

/// Module with the NFA to DFA conversion.
pub(crate) mod subset_construction;
