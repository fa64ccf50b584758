//! The parser of the glob dialect: `*` matches any run of characters, `?` any single character,
//! `[...]` a character class. Everything else is literal.

use crate::errors::Result;

use super::{bootstrap::GLOB_LEXER, parser::LexemeStream, LexemeKind, Node};

/// Parse a glob into a syntax tree.
pub(crate) fn parse_glob(pattern: &str) -> Result<Node> {
    let mut stream = LexemeStream::new(&GLOB_LEXER, pattern);
    let mut nodes = Vec::new();
    loop {
        let token = stream.next_token()?;
        let node = match token.kind {
            LexemeKind::End => return Ok(Node::sequence(nodes)),
            LexemeKind::ClassBegin => {
                let first = stream.next_token()?;
                stream.parse_class(first)?
            }
            LexemeKind::Wildcard => Node::any(),
            LexemeKind::ZeroOrMore => Node::repeat(Node::any(), 0, None),
            _ => stream.literal(token)?,
        };
        nodes.push(node);
    }
}
