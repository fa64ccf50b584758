#![forbid(missing_docs)]
//! # `lexfa`
//! The `lexfa` crate compiles sets of patterns into a single deterministic finite automaton and
//! scans character streams with it.
//! Every pattern is associated with a value of your choice. Scanning always takes the longest
//! prefix of the remaining input that one of the patterns accepts and returns the value of that
//! pattern together with the matched text, so a set of patterns is a lexer.
//!
//! Two pattern dialects are supported:
//! - regular expressions with alternatives `a|b`, groups `(ab)`, character classes `[a-z]`,
//!   negated classes `[^a-z]`, the wildcard `.` and the quantifiers `*`, `+`, `?`, `{m}`, `{m,}`,
//!   `{,n}` and `{m,n}`,
//! - globs with `*`, `?`, character classes `[a-z]` and negated classes `[!a-z]`.
//!
//! Metacharacters are escaped with a backslash, `\n`, `\r` and `\t` denote the control
//! characters. Characters are 16-bit code units, i.e. `.` matches `U+0000` to `U+FFFF`.
//!
//! If two patterns with different values accept the same text, compilation fails.
//!
//! # Example
//! ```rust
//! use lexfa::Compiler;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Token {
//!     Integer,
//!     Plus,
//!     Minus,
//!     LParen,
//!     RParen,
//!     Whitespace,
//! }
//!
//! fn main() -> lexfa::Result<()> {
//!     let mut compiler = Compiler::regex();
//!     compiler.add_patterns([
//!         ("[0-9]+", Token::Integer),
//!         (r"\+", Token::Plus),
//!         ("-", Token::Minus),
//!         (r"\(", Token::LParen),
//!         (r"\)", Token::RParen),
//!         ("[ \n\r\t]+", Token::Whitespace),
//!     ])?;
//!     let matcher = compiler.compile()?;
//!
//!     let tokens: Vec<_> = matcher
//!         .open("1 + (2 - 3)".chars())
//!         .filter(|m| *m.value() != Token::Whitespace)
//!         .map(|m| format!("{:?}({})", m.value(), m.capture()))
//!         .collect();
//!     assert_eq!(
//!         tokens,
//!         [
//!             "Integer(1)",
//!             "Plus(+)",
//!             "LParen(()",
//!             "Integer(2)",
//!             "Minus(-)",
//!             "Integer(3)",
//!             "RParen())",
//!         ]
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Crate features
//! - `dot_writer`: enabled by default. Adds [Matcher::render_dot] to output the compiled
//!   automaton in graphviz dot format.
//! - `serde`: enabled by default. Makes [Match], [Pattern], [PatternSet] and [Dialect]
//!   serializable and adds [PatternSet::from_json].

/// The module with the pattern compiler.
mod compiler;
pub use compiler::{Compiler, Dialect};

/// Module with error definitions
mod errors;
pub use errors::{LexfaError, LexfaErrorKind, Result, SyntaxErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module that provides the MatchIterator type
mod match_iterator;
pub use match_iterator::MatchIterator;

/// Module that provides a Match type
mod match_type;
pub use match_type::Match;

/// The module with the matcher.
mod matcher;
pub use matcher::Matcher;

/// Module that provides a Pattern type and a PatternSet type
mod pattern;
pub use pattern::{Pattern, PatternSet};
