//! Builder error types (spec.md §7, SPEC_FULL.md AMBIENT.1).
//!
//! Plain enums with hand-written `Display`/`std::error::Error` impls, matching the teacher's
//! error-handling idiom — no `thiserror`/`anyhow` in this crate.

use std::fmt;

use crate::scanner::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorKind {
    UnexpectedToken,
    UnterminatedString,
    InvalidNumericLiteral,
    UnsupportedConstruct,
    IllegalCharacter,
}

/// One accumulated diagnostic (spec.md §7 "Structural errors").
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    pub kind: ParserErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub start: usize,
    pub end: usize,
}

impl ParserError {
    pub fn at_token(kind: ParserErrorKind, message: impl Into<String>, token: &Token) -> Self {
        Self {
            kind,
            message: message.into(),
            line: token.line,
            column: token.column,
            start: token.start,
            end: token.end,
        }
    }

    pub fn expected(expected_kind_name: &str, token: &Token) -> Self {
        Self::at_token(
            ParserErrorKind::UnexpectedToken,
            format!("expected {expected_kind_name}, got {}", describe(token)),
            token,
        )
    }
}

fn describe(token: &Token) -> String {
    if token.value.is_empty() {
        format!("{:?}", token.kind)
    } else {
        token.value.clone()
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.column)
    }
}

impl std::error::Error for ParserError {}

/// The crate-level error `Builder::build()` returns in strict mode (spec.md §4.3 "Strict").
#[derive(Debug, Clone, PartialEq)]
pub struct BuildError(pub ParserError);

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BuildError {}

impl From<ParserError> for BuildError {
    fn from(err: ParserError) -> Self {
        BuildError(err)
    }
}
