/// The kinds of lexemes produced by the bootstrap tokenizers while reading pattern text.
/// Not every kind is produced by every dialect, globs e.g. have no alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum LexemeKind {
    /// The end of the pattern text.
    End,
    Alternative,
    ClassBegin,
    ClassEnd,
    Comma,
    Digit,
    /// A backslash sequence, the lexeme carries the character it stands for.
    Escape,
    Literal,
    Negate,
    OneOrMore,
    Range,
    RepeatBegin,
    RepeatEnd,
    SequenceBegin,
    SequenceEnd,
    Wildcard,
    ZeroOrMore,
    ZeroOrOne,
}

/// The value type of the bootstrap tokenizers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub(crate) kind: LexemeKind,
    pub(crate) replacement: Option<char>,
}

impl Lexeme {
    pub(crate) fn new(kind: LexemeKind) -> Self {
        Self {
            kind,
            replacement: None,
        }
    }

    pub(crate) fn escape(replacement: char) -> Self {
        Self {
            kind: LexemeKind::Escape,
            replacement: Some(replacement),
        }
    }
}
