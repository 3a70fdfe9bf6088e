//! A scanner and recursive-descent builder producing a typed Solidity syntax tree.
//!
//! ```text
//! source string -> Scanner::tokenize() -> Vec<Token> -> Builder::build() -> BuildOutput
//! ```
//!
//! [`scanner`] turns source text into a flat token stream; [`builder`] consumes that stream and
//! produces a [`ast::Node::SourceUnit`] plus whatever diagnostics accumulated along the way.
//! [`parse`] is a thin convenience wrapper around [`Builder::build`].

pub mod ast;
pub mod builder;
pub mod scanner;

pub use builder::{BuildError, BuildOutput, Builder, ParserError, ParserErrorKind, ParserOptions};

/// Parse `source` with `options`. Equivalent to `Builder::build(source, options)`.
pub fn parse(source: &str, options: ParserOptions) -> Result<BuildOutput, BuildError> {
    Builder::build(source, options)
}
