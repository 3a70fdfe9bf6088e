//! Phase 2: token stream → AST (spec.md §4.2, §4.3).

mod assembly;
mod contract;
mod declarations;
mod error;
mod expressions;
mod source_unit;
mod statements;
mod types;

pub use error::{BuildError, ParserError, ParserErrorKind};

use crate::ast::{Identifier, Node};
use crate::scanner::{Scanner, Token, TokenKind};
use types::is_identifier_like_kind;

/// The builder's three independent construction-time options (spec.md §6.3). Defaults are all
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub tolerant: bool,
    pub loc: bool,
    pub range: bool,
}

/// The tree plus whatever diagnostics accumulated while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutput {
    pub source_unit: Node,
    pub errors: Vec<ParserError>,
}

/// Result type threaded through every builder method: `Err` only ever reaches the top in strict
/// mode, since `record_error` swallows it into `self.errors` under tolerant mode (spec.md §4.3).
pub(crate) type PResult<T> = Result<T, BuildError>;

/// A saved cursor position for speculative, backtracking lookahead (spec.md §4.2 "Structure" —
/// the bounded-lookahead helper; §9 "Speculative tuple-declaration parse").
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark(usize);

/// State saved by [`Builder::begin_probe`] and restored by [`Builder::end_probe`].
pub(crate) struct ProbeState {
    mark: Mark,
    tolerant: bool,
    errors: Vec<ParserError>,
}

pub struct Builder {
    tokens: Vec<Token>,
    pos: usize,
    options: ParserOptions,
    errors: Vec<ParserError>,
    /// Suppresses the `{...}` call-options production while parsing a `try` call expression,
    /// so the following block brace isn't mistaken for one (spec.md §4.2 "Try statement").
    suppress_call_options: bool,
}

impl Builder {
    pub fn new(source: &str, options: ParserOptions) -> Self {
        Self {
            tokens: Scanner::tokenize(source),
            pos: 0,
            options,
            errors: Vec::new(),
            suppress_call_options: false,
        }
    }

    /// Parse `source` and produce a `SourceUnit`. Strict mode (the default) returns `Err` on the
    /// first diagnostic; tolerant mode always returns `Ok`, with `errors` populated.
    pub fn build(source: &str, options: ParserOptions) -> Result<BuildOutput, BuildError> {
        let mut builder = Self::new(source, options);
        let source_unit = builder.parse_source_unit()?;
        Ok(BuildOutput {
            source_unit,
            errors: builder.errors,
        })
    }

    // ---- cursor primitives (spec.md §4.2 "Structure") ----

    pub(crate) fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    pub(crate) fn peek_at(&self, k: usize) -> &Token {
        let idx = (self.pos + k).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, expected_name: &str) -> PResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let tok = self.peek().clone();
            // §4.3: an `expect` failure still advances, even in strict mode, so that a
            // caller which chooses to keep going after catching the error never loops forever.
            self.advance();
            self.record_error(ParserError::expected(expected_name, &tok))?;
            Ok(tok)
        }
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub(crate) fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// Enter a speculative attempt: forces tolerant mode (so `record_error` never returns `Err`
    /// mid-probe) and swaps `errors` out so a failed attempt leaves no diagnostic behind. Pair
    /// with [`Builder::end_probe`], which also rewinds the cursor.
    pub(crate) fn begin_probe(&mut self) -> ProbeState {
        let state = ProbeState {
            mark: self.mark(),
            tolerant: self.options.tolerant,
            errors: std::mem::take(&mut self.errors),
        };
        self.options.tolerant = true;
        state
    }

    pub(crate) fn end_probe(&mut self, state: ProbeState) {
        self.errors = state.errors;
        self.options.tolerant = state.tolerant;
        self.reset(state.mark);
    }

    /// Returns the previous value, so callers can restore it afterward.
    pub(crate) fn set_call_options_suppressed(&mut self, suppressed: bool) -> bool {
        std::mem::replace(&mut self.suppress_call_options, suppressed)
    }

    pub(crate) fn call_options_allowed(&self) -> bool {
        !self.suppress_call_options
    }

    // ---- error recording & synchronization (spec.md §4.3) ----

    /// Record a diagnostic. In tolerant mode this always returns `Ok`, so callers keep going
    /// via the usual `?` plumbing; in strict mode it returns `Err`, short-circuiting `build()`.
    pub(crate) fn record_error(&mut self, err: ParserError) -> PResult<()> {
        log::warn!("{err}");
        self.errors.push(err.clone());
        if self.options.tolerant {
            Ok(())
        } else {
            Err(BuildError::from(err))
        }
    }

    /// After recording an error in tolerant mode: advance one token, then keep advancing until
    /// the previous token was `;` or the next token starts a top-level construct (spec.md §4.3).
    pub(crate) fn synchronize(&mut self) {
        if !self.is_at_end() {
            self.advance();
        }
        while !self.is_at_end() {
            let prev_was_semicolon = self.pos > 0 && self.tokens[self.pos - 1].kind == TokenKind::Semicolon;
            if prev_was_semicolon {
                return;
            }
            if self.check_any(&TOP_LEVEL_STARTERS) {
                return;
            }
            self.advance();
        }
    }

    pub(crate) fn options(&self) -> ParserOptions {
        self.options
    }

    /// Build a node's `loc`/`range` header from the first and last token it spans.
    pub(crate) fn meta_from(&self, first: &Token, last: &Token) -> crate::ast::NodeMeta {
        crate::ast::NodeMeta::from_tokens(self.options.loc, self.options.range, first, last)
    }

    /// Same, but using the token just before the current cursor as the "last" token — the usual
    /// case right after an `expect(Semicolon, ...)` or closing-brace consumption.
    pub(crate) fn meta_from_start(&self, first: &Token) -> crate::ast::NodeMeta {
        let last = &self.tokens[self.pos.saturating_sub(1).max(0)];
        self.meta_from(first, last)
    }

    // ---- contextual-keyword-as-identifier support (spec.md §4.1 "Contextual keywords") ----

    pub(crate) fn is_identifier_like(&self) -> bool {
        is_identifier_like_kind(&self.peek().kind)
    }

    pub(crate) fn parse_identifier_like_name(&mut self) -> PResult<String> {
        if self.is_identifier_like() {
            Ok(self.advance().value)
        } else {
            let tok = self.peek().clone();
            self.advance();
            self.record_error(ParserError::expected("identifier", &tok))?;
            Ok(tok.value)
        }
    }

    pub(crate) fn parse_identifier_like(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let name = self.parse_identifier_like_name()?;
        Ok(Node::Identifier(Identifier {
            meta: self.meta_from_start(&start),
            name,
        }))
    }
}

const TOP_LEVEL_STARTERS: [TokenKind; 12] = [
    TokenKind::Contract,
    TokenKind::Interface,
    TokenKind::Library,
    TokenKind::Abstract,
    TokenKind::Function,
    TokenKind::Struct,
    TokenKind::Enum,
    TokenKind::Event,
    TokenKind::Error,
    TokenKind::Pragma,
    TokenKind::Import,
    TokenKind::Using,
];
