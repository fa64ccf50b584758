//! The tokenizers that split pattern text into lexemes.
//!
//! They are matchers themselves, built from hand written transition tables and determinized
//! once per process on first use.

use std::sync::LazyLock;

use log::trace;

use crate::Matcher;

use super::{
    branch::{codepoint_of, Codepoint, CHARACTER_MAX, CHARACTER_MIN, END_OF_STREAM},
    subset_construction::determinize,
    Lexeme, LexemeKind, Nfa,
};

/// The tokenizer of the regex dialect.
pub(crate) static REGEX_LEXER: LazyLock<Matcher<Lexeme>> =
    LazyLock::new(|| build_lexer("regex", REGEX_CHARACTERS, REGEX_ESCAPES));

/// The tokenizer of the glob dialect.
pub(crate) static GLOB_LEXER: LazyLock<Matcher<Lexeme>> =
    LazyLock::new(|| build_lexer("glob", GLOB_CHARACTERS, GLOB_ESCAPES));

#[derive(Debug, Clone, Copy)]
enum Target {
    Lexeme(LexemeKind),
    Literal,
    Escape,
}

const fn c(character: char) -> Codepoint {
    character as Codepoint
}

const REGEX_CHARACTERS: &[(Codepoint, Codepoint, Target)] = &[
    (END_OF_STREAM, END_OF_STREAM, Target::Lexeme(LexemeKind::End)),
    (CHARACTER_MIN, c('\''), Target::Literal),
    (c('('), c('('), Target::Lexeme(LexemeKind::SequenceBegin)),
    (c(')'), c(')'), Target::Lexeme(LexemeKind::SequenceEnd)),
    (c('*'), c('*'), Target::Lexeme(LexemeKind::ZeroOrMore)),
    (c('+'), c('+'), Target::Lexeme(LexemeKind::OneOrMore)),
    (c(','), c(','), Target::Lexeme(LexemeKind::Comma)),
    (c('-'), c('-'), Target::Lexeme(LexemeKind::Range)),
    (c('.'), c('.'), Target::Lexeme(LexemeKind::Wildcard)),
    (c('/'), c('/'), Target::Literal),
    (c('0'), c('9'), Target::Lexeme(LexemeKind::Digit)),
    (c(':'), c('>'), Target::Literal),
    (c('?'), c('?'), Target::Lexeme(LexemeKind::ZeroOrOne)),
    (c('@'), c('Z'), Target::Literal),
    (c('['), c('['), Target::Lexeme(LexemeKind::ClassBegin)),
    (c('\\'), c('\\'), Target::Escape),
    (c(']'), c(']'), Target::Lexeme(LexemeKind::ClassEnd)),
    (c('^'), c('^'), Target::Lexeme(LexemeKind::Negate)),
    (c('_'), c('z'), Target::Literal),
    (c('{'), c('{'), Target::Lexeme(LexemeKind::RepeatBegin)),
    (c('|'), c('|'), Target::Lexeme(LexemeKind::Alternative)),
    (c('}'), c('}'), Target::Lexeme(LexemeKind::RepeatEnd)),
    (c('~'), CHARACTER_MAX, Target::Literal),
];

const REGEX_ESCAPES: &[(char, char)] = &[
    ('(', '('),
    (')', ')'),
    ('*', '*'),
    ('+', '+'),
    ('-', '-'),
    ('.', '.'),
    ('?', '?'),
    ('[', '['),
    (']', ']'),
    ('\\', '\\'),
    ('^', '^'),
    ('{', '{'),
    ('|', '|'),
    ('}', '}'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
];

const GLOB_CHARACTERS: &[(Codepoint, Codepoint, Target)] = &[
    (END_OF_STREAM, END_OF_STREAM, Target::Lexeme(LexemeKind::End)),
    (CHARACTER_MIN, c(' '), Target::Literal),
    (c('!'), c('!'), Target::Lexeme(LexemeKind::Negate)),
    (c('"'), c(')'), Target::Literal),
    (c('*'), c('*'), Target::Lexeme(LexemeKind::ZeroOrMore)),
    (c('+'), c(','), Target::Literal),
    (c('-'), c('-'), Target::Lexeme(LexemeKind::Range)),
    (c('.'), c('>'), Target::Literal),
    (c('?'), c('?'), Target::Lexeme(LexemeKind::Wildcard)),
    (c('@'), c('Z'), Target::Literal),
    (c('['), c('['), Target::Lexeme(LexemeKind::ClassBegin)),
    (c('\\'), c('\\'), Target::Escape),
    (c(']'), c(']'), Target::Lexeme(LexemeKind::ClassEnd)),
    (c('^'), CHARACTER_MAX, Target::Literal),
];

const GLOB_ESCAPES: &[(char, char)] = &[
    ('!', '!'),
    ('*', '*'),
    ('-', '-'),
    ('?', '?'),
    ('[', '['),
    (']', ']'),
    ('\\', '\\'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
];

fn build_lexer(
    name: &str,
    characters: &[(Codepoint, Codepoint, Target)],
    escapes: &[(char, char)],
) -> Matcher<Lexeme> {
    let mut nfa = Nfa::new();

    let escape = nfa.push_empty();
    for (trigger, replacement) in escapes {
        let target = nfa.push_value(Lexeme::escape(*replacement));
        let trigger = codepoint_of(*trigger);
        nfa.branch(escape, trigger, trigger, target);
    }

    let start = nfa.push_empty();
    let literal = nfa.push_value(Lexeme::new(LexemeKind::Literal));
    for (begin, end, target) in characters {
        let target = match target {
            Target::Lexeme(kind) => nfa.push_value(Lexeme::new(*kind)),
            Target::Literal => literal,
            Target::Escape => escape,
        };
        nfa.branch(start, *begin, *end, target);
    }

    let dfa = determinize(&nfa, start)
        .unwrap_or_else(|_| panic!("The {} tokenizer table is ambiguous", name));
    trace!(
        "Built {} tokenizer with {} DFA states",
        name,
        dfa.states().len()
    );
    Matcher::new(dfa)
}
