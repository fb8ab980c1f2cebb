//! Parser for written type references: `Fixture`, `Fixture<int>`,
//! `Xunit.IClassFixture<Fixture<T>>`.
//!
//! The parser only builds syntax; name resolution happens in the binder.

use fixsrc_common::limits::MAX_TYPE_ARGUMENT_DEPTH;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSyntax {
    pub name: String,
    pub args: Vec<TypeSyntax>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSyntaxError {
    pub input: String,
    pub offset: usize,
    pub message: &'static str,
}

impl fmt::Display for TypeSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid type '{}' at offset {}: {}",
            self.input, self.offset, self.message
        )
    }
}

impl std::error::Error for TypeSyntaxError {}

pub fn parse_type(input: &str) -> Result<TypeSyntax, TypeSyntaxError> {
    let mut parser = Parser {
        input,
        bytes: input.as_bytes(),
        pos: 0,
    };
    let ty = parser.parse_type(0)?;
    parser.skip_whitespace();
    if parser.pos != parser.bytes.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(ty)
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn parse_type(&mut self, depth: u32) -> Result<TypeSyntax, TypeSyntaxError> {
        if depth > MAX_TYPE_ARGUMENT_DEPTH {
            return Err(self.error("generic arguments nested too deeply"));
        }
        self.skip_whitespace();
        let name = self.parse_name()?;
        self.skip_whitespace();

        let mut args = Vec::new();
        if self.eat(b'<') {
            loop {
                args.push(self.parse_type(depth + 1)?);
                self.skip_whitespace();
                if self.eat(b',') {
                    continue;
                }
                if self.eat(b'>') {
                    break;
                }
                return Err(self.error("expected ',' or '>'"));
            }
        }

        Ok(TypeSyntax { name, args })
    }

    fn parse_name(&mut self) -> Result<String, TypeSyntaxError> {
        let start = self.pos;
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b >= 0x80 {
                self.pos += 1;
            } else {
                break;
            }
        }
        let name = &self.input[start..self.pos];
        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }
        if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
            return Err(TypeSyntaxError {
                input: self.input.to_string(),
                offset: start,
                message: "malformed qualified name",
            });
        }
        Ok(name.to_string())
    }

    fn skip_whitespace(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.bytes.get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, message: &'static str) -> TypeSyntaxError {
        TypeSyntaxError {
            input: self.input.to_string(),
            offset: self.pos,
            message,
        }
    }
}

#[cfg(test)]
#[path = "../tests/type_syntax_tests.rs"]
mod tests;
