//! Textual type names to descriptors.
//!
//! Accepts the reflection-style names an introspection facility would print:
//!
//! ```text
//! type     := path generic? ('+' ident generic?)*
//! path     := ident ('.' ident)*
//! generic  := ('<' | '[') type (',' type)* ('>' | ']')
//! ident    := name-char+ ('`' digit+)?
//! ```
//!
//! The last path segment is the simple name, the others form the namespace.
//! `+` separates a nested type from its declaring type, as in
//! `Outer+Inner`. Arity markers are dropped, and whitespace is allowed
//! around generic brackets and commas.

use crate::stack::ensure_sufficient_stack;
use crate::{TypeDescriptor, TypeIdx, TypeTable};

/// Error produced while parsing a type name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a type name at offset {offset}")]
    ExpectedName { offset: usize },

    #[error("unexpected character `{found}` at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("unexpected end of input, expected `{expected}`")]
    UnexpectedEnd { expected: char },

    #[error("`{open}` closed by `{close}` at offset {offset}")]
    MismatchedBracket {
        open: char,
        close: char,
        offset: usize,
    },

    #[error("empty generic argument list at offset {offset}")]
    EmptyArguments { offset: usize },

    #[error("arity marker without digits at offset {offset}")]
    MalformedArity { offset: usize },
}

/// Parse `input` and intern its descriptors into `table`.
///
/// Returns the handle of the outermost type. Structurally equal parts are
/// shared, so `IDictionary<String, String>` stores `String` once.
#[tracing::instrument(level = "trace", skip(table))]
pub fn parse_type_name(table: &mut TypeTable, input: &str) -> Result<TypeIdx, ParseError> {
    let mut parser = Parser {
        src: input,
        pos: 0,
        table,
    };
    let idx = parser.parse_type()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(idx),
        Some(found) => Err(ParseError::UnexpectedChar {
            found,
            offset: parser.pos,
        }),
    }
}

struct Parser<'src, 'tbl> {
    src: &'src str,
    pos: usize,
    table: &'tbl mut TypeTable,
}

impl<'src> Parser<'src, '_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn parse_type(&mut self) -> Result<TypeIdx, ParseError> {
        ensure_sufficient_stack(|| self.parse_type_inner())
    }

    fn parse_type_inner(&mut self) -> Result<TypeIdx, ParseError> {
        self.skip_whitespace();

        let mut namespace = Vec::new();
        let mut name = self.ident()?;
        while self.peek() == Some('.') {
            self.bump();
            namespace.push(name);
            name = self.ident()?;
        }

        let args = self.generic_args()?;
        let mut current = self.table.intern(
            TypeDescriptor::new(name)
                .in_namespace(namespace.iter().copied())
                .with_args(args),
        );

        // Nested types share the namespace of their outermost declaring type.
        while self.peek() == Some('+') {
            self.bump();
            let nested = self.ident()?;
            let args = self.generic_args()?;
            current = self.table.intern(
                TypeDescriptor::new(nested)
                    .in_namespace(namespace.iter().copied())
                    .nested_in(current)
                    .with_args(args),
            );
        }

        Ok(current)
    }

    fn generic_args(&mut self) -> Result<Vec<TypeIdx>, ParseError> {
        let before = self.pos;
        self.skip_whitespace();
        let open_offset = self.pos;
        let open = match self.peek() {
            Some(open @ ('<' | '[')) => open,
            _ => {
                self.pos = before;
                return Ok(Vec::new());
            }
        };
        self.bump();
        self.skip_whitespace();
        if matches!(self.peek(), Some('>' | ']')) {
            return Err(ParseError::EmptyArguments {
                offset: open_offset,
            });
        }

        let expected = closing_bracket(open);
        let mut args = Vec::new();
        loop {
            args.push(self.parse_type()?);
            self.skip_whitespace();
            let offset = self.pos;
            match self.bump() {
                Some(',') => {}
                Some(close @ ('>' | ']')) if close == expected => return Ok(args),
                Some(close @ ('>' | ']')) => {
                    return Err(ParseError::MismatchedBracket {
                        open,
                        close,
                        offset,
                    })
                }
                Some(found) => return Err(ParseError::UnexpectedChar { found, offset }),
                None => return Err(ParseError::UnexpectedEnd { expected }),
            }
        }
    }

    /// Read one name segment, dropping a trailing arity marker.
    fn ident(&mut self) -> Result<&'src str, ParseError> {
        let src = self.src;
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        if self.pos == start {
            return Err(ParseError::ExpectedName { offset: start });
        }
        let name = &src[start..self.pos];

        if self.peek() == Some('`') {
            let marker = self.pos;
            self.bump();
            let digits = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
            if self.pos == digits {
                return Err(ParseError::MalformedArity { offset: marker });
            }
        }

        Ok(name)
    }
}

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '.' | '+' | '<' | '>' | '[' | ']' | ',' | '`')
}

fn closing_bracket(open: char) -> char {
    if open == '<' {
        '>'
    } else {
        ']'
    }
}

#[cfg(test)]
mod tests;
