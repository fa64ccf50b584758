//! The recursive descent parser of the regex dialect.
//!
//! ```text
//! Alternative  := Sequence ('|' Sequence)*
//! Sequence     := Term*
//! Term         := Atom Quantifier?
//! Atom         := Literal | '.' | '(' Alternative ')' | '[' Class ']' | Escape
//! Quantifier   := '*' | '+' | '?' | '{' Repeat '}'
//! Repeat       := Digits? (',' Digits?)?
//! ```
//!
//! Metacharacters that can't start an atom are taken literally, as is `)` outside of a group.
//! Groups nest at most [MAX_GROUP_DEPTH] levels deep.

use crate::errors::{Result, SyntaxErrorKind};

use super::{
    bootstrap::REGEX_LEXER,
    parser::{LexemeStream, Token},
    LexemeKind, Node,
};

/// The maximum number of nested groups. Parsing and lowering recurse once per level.
pub(crate) const MAX_GROUP_DEPTH: usize = 128;

/// Parse a regex into a syntax tree.
pub(crate) fn parse_regex(pattern: &str) -> Result<Node> {
    let mut parser = RegexParser {
        stream: LexemeStream::new(&REGEX_LEXER, pattern),
        depth: 0,
    };
    let token = parser.stream.next_token()?;
    let (node, _end) = parser.parse_alternative(token, true)?;
    debug_assert_eq!(_end.kind, LexemeKind::End);
    Ok(node)
}

struct RegexParser<'a> {
    stream: LexemeStream<'a>,
    // Number of currently open groups
    depth: usize,
}

impl RegexParser<'_> {
    /// Returns the node and the token that ended the alternative, which is either the end of the
    /// pattern or, inside a group, the closing parenthesis.
    fn parse_alternative(&mut self, mut token: Token, top_level: bool) -> Result<(Node, Token)> {
        let mut children = Vec::new();
        loop {
            let (sequence, next) = self.parse_sequence(token, top_level)?;
            children.push(sequence);
            if next.kind != LexemeKind::Alternative {
                return Ok((Node::alternative(children), next));
            }
            token = self.stream.next_token()?;
        }
    }

    fn parse_sequence(&mut self, mut token: Token, top_level: bool) -> Result<(Node, Token)> {
        let mut nodes = Vec::new();
        loop {
            let node = match token.kind {
                LexemeKind::Alternative => return Ok((Node::sequence(nodes), token)),
                LexemeKind::End if top_level => return Ok((Node::sequence(nodes), token)),
                LexemeKind::End => return Err(self.stream.error(SyntaxErrorKind::UnfinishedGroup)),
                LexemeKind::SequenceEnd if !top_level => {
                    return Ok((Node::sequence(nodes), token))
                }
                LexemeKind::ClassBegin => {
                    let first = self.stream.next_token()?;
                    self.stream.parse_class(first)?
                }
                LexemeKind::SequenceBegin => {
                    if self.depth == MAX_GROUP_DEPTH {
                        return Err(self.stream.error(SyntaxErrorKind::NestingTooDeep));
                    }
                    self.depth += 1;
                    let first = self.stream.next_token()?;
                    let (group, _close) = self.parse_alternative(first, false)?;
                    self.depth -= 1;
                    group
                }
                LexemeKind::Wildcard => Node::any(),
                _ => self.stream.literal(token)?,
            };

            let next = self.stream.next_token()?;
            let (min, max, next) = match next.kind {
                LexemeKind::OneOrMore => (1, None, self.stream.next_token()?),
                LexemeKind::ZeroOrMore => (0, None, self.stream.next_token()?),
                LexemeKind::ZeroOrOne => (0, Some(1), self.stream.next_token()?),
                LexemeKind::RepeatBegin => {
                    let first = self.stream.next_token()?;
                    let (min, max) = self.parse_repeat(first)?;
                    (min, max, self.stream.next_token()?)
                }
                _ => (1, Some(1), next),
            };
            nodes.push(Node::repeat(node, min, max));
            token = next;
        }
    }

    /// Parse the bounds of `{m}`, `{m,}`, `{,n}` or `{m,n}` up to the closing brace.
    fn parse_repeat(&mut self, token: Token) -> Result<(usize, Option<usize>)> {
        let (min, mut token) = self.parse_number(token)?;
        let min = min.unwrap_or(0);

        let max = if token.kind == LexemeKind::Comma {
            let first = self.stream.next_token()?;
            let (max, next) = self.parse_number(first)?;
            token = next;
            if max.is_some_and(|max| max < min) {
                return Err(self.stream.error(SyntaxErrorKind::InvalidRepeat));
            }
            max
        } else {
            Some(min)
        };

        if token.kind != LexemeKind::RepeatEnd {
            return Err(self.stream.error(SyntaxErrorKind::UnfinishedRepeat));
        }
        Ok((min, max))
    }

    /// Read a possibly empty run of digits. Returns the number, if any, and the token after it.
    fn parse_number(&mut self, mut token: Token) -> Result<(Option<usize>, Token)> {
        let mut number: Option<usize> = None;
        while token.kind == LexemeKind::Digit {
            let digit = token
                .character
                .and_then(|c| c.to_digit(10))
                .ok_or_else(|| self.stream.error(SyntaxErrorKind::InvalidRepeat))?;
            number = number
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .map(Some)
                .ok_or_else(|| self.stream.error(SyntaxErrorKind::InvalidRepeat))?;
            token = self.stream.next_token()?;
        }
        Ok((number, token))
    }
}
