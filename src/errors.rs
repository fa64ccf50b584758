use thiserror::Error;

/// The result type for the `lexfa` crate.
pub type Result<T> = std::result::Result<T, LexfaError>;

/// The error type for the `lexfa` crate.
#[derive(Error, Debug)]
pub struct LexfaError {
    /// The source of the error.
    pub source: Box<LexfaErrorKind>,
}

impl LexfaError {
    /// Create a new `LexfaError`.
    pub fn new(kind: LexfaErrorKind) -> Self {
        LexfaError {
            source: Box::new(kind),
        }
    }

    /// Create a syntax error detected at the given position of the pattern.
    pub(crate) fn syntax(kind: SyntaxErrorKind, position: usize) -> Self {
        LexfaError::new(LexfaErrorKind::SyntaxError { kind, position })
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &LexfaErrorKind {
        &self.source
    }
}

impl std::fmt::Display for LexfaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum LexfaErrorKind {
    /// The text of a pattern is malformed.
    /// The position is the number of pattern characters consumed when the error was detected,
    /// the end of the pattern counting as one character.
    #[error("{kind} at position {position}")]
    SyntaxError {
        /// What is wrong with the pattern.
        kind: SyntaxErrorKind,
        /// Where the error was detected.
        position: usize,
    },

    /// Two or more patterns with different values accept the same input.
    /// Contains the debug representation of all colliding values.
    #[error("transition collision between multiple values: {}", .0.join(", "))]
    Ambiguity(Vec<String>),

    /// Adding the pattern would grow the automaton beyond the given number of states.
    #[error("pattern exceeds the limit of {limit} automaton states")]
    SizeLimitExceeded {
        /// The maximum number of states.
        limit: usize,
    },

    /// A pattern set could not be read.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// The kinds of syntax errors in patterns.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A character that can't start any token of the pattern language.
    #[error("unrecognized character")]
    UnrecognizedCharacter,

    /// A character class is not closed by `]`.
    #[error("unfinished characters class")]
    UnfinishedClass,

    /// A group is not closed by `)`.
    #[error("unfinished parenthesis")]
    UnfinishedGroup,

    /// The bounds of a repeat specifier are not numbers or the minimum exceeds the maximum.
    #[error("invalid repeat sequence")]
    InvalidRepeat,

    /// A repeat specifier is not closed by `}`.
    #[error("expected end of repeat specifier")]
    UnfinishedRepeat,

    /// The end of a character range precedes its beginning.
    #[error("invalid characters range")]
    InvalidRange,

    /// Groups are nested deeper than the parser supports.
    #[error("parenthesis nested too deeply")]
    NestingTooDeep,
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for LexfaError {
    fn from(error: serde_json::Error) -> Self {
        LexfaError::new(LexfaErrorKind::SerdeError(error))
    }
}
