//! Parts shared by the pattern parsers of both dialects.

use std::str::Chars;

use log::trace;

use crate::{
    errors::{LexfaError, Result, SyntaxErrorKind},
    MatchIterator, Matcher,
};

use super::{
    branch::{codepoint_of, CharacterRange},
    Lexeme, LexemeKind, Node,
};

/// A lexeme of the pattern text together with the character it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: LexemeKind,
    /// The replacement of an escape sequence or the matched character otherwise.
    /// Only the end of the pattern has no character.
    pub(crate) character: Option<char>,
}

/// The pattern text as a stream of tokens.
pub(crate) struct LexemeStream<'a> {
    lexemes: MatchIterator<Lexeme, Chars<'a>>,
}

impl<'a> LexemeStream<'a> {
    pub(crate) fn new(lexer: &Matcher<Lexeme>, pattern: &'a str) -> Self {
        Self {
            lexemes: lexer.open(pattern.chars()),
        }
    }

    /// Read the next token. Fails if the text at the current position is no lexeme.
    pub(crate) fn next_token(&mut self) -> Result<Token> {
        let Some(lexeme) = self.lexemes.try_match_next() else {
            return Err(self.error(SyntaxErrorKind::UnrecognizedCharacter));
        };
        let character = lexeme
            .value()
            .replacement
            .or_else(|| lexeme.capture().chars().next());
        let token = Token {
            kind: lexeme.value().kind,
            character,
        };
        trace!("Token {:?} at position {}", token, self.lexemes.position());
        Ok(token)
    }

    /// Create a syntax error at the current position.
    pub(crate) fn error(&self, kind: SyntaxErrorKind) -> LexfaError {
        LexfaError::syntax(kind, self.lexemes.position())
    }

    /// The node matching the character of the token literally.
    pub(crate) fn literal(&self, token: Token) -> Result<Node> {
        match token.character {
            Some(c) => Ok(Node::character(c)),
            None => Err(self.error(SyntaxErrorKind::UnrecognizedCharacter)),
        }
    }

    /// Parse a character class. The opening bracket has been read, `token` is the one after it.
    /// Returns after the closing bracket has been read, it is not consumed further.
    ///
    /// A leading negation token complements the class. A closing bracket directly after the
    /// opening one (or after the negation) is taken literally.
    pub(crate) fn parse_class(&mut self, mut token: Token) -> Result<Node> {
        let mut ranges = Vec::new();

        let negated = token.kind == LexemeKind::Negate;
        if negated {
            token = self.next_token()?;
        }

        if token.kind == LexemeKind::ClassEnd {
            if let Some(c) = token.character {
                ranges.push(CharacterRange::single(c));
            }
            token = self.next_token()?;
        }

        loop {
            let begin = match (token.kind, token.character) {
                (LexemeKind::ClassEnd, _) => break,
                (_, Some(c)) => c,
                (_, None) => return Err(self.error(SyntaxErrorKind::UnfinishedClass)),
            };

            token = self.next_token()?;
            let end = if token.kind == LexemeKind::Range {
                token = self.next_token()?;
                let Some(end) = token.character else {
                    return Err(self.error(SyntaxErrorKind::UnfinishedClass));
                };
                if end < begin {
                    return Err(self.error(SyntaxErrorKind::InvalidRange));
                }
                token = self.next_token()?;
                end
            } else {
                begin
            };

            ranges.push(CharacterRange::new(codepoint_of(begin), codepoint_of(end)));
        }

        if negated {
            ranges = CharacterRange::complement(&ranges);
        }
        Ok(Node::Character(ranges))
    }
}
