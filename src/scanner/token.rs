//! Token representation emitted by the scanner.
//!
//! A [`Token`] is an immutable value: once the scanner emits it, nothing mutates
//! its fields. Positions are recorded eagerly at emission time (spec.md §3.1).

use serde::{Deserialize, Serialize};

/// The full closed set of token kinds the scanner can emit.
///
/// Sized primitive type kinds (`Int(N)`, `BytesN(N)`, …) carry their size inline rather than
/// being re-derived from the lexeme later, since the scanner already paid for the digit scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    Identifier,
    Number,
    HexNumber,
    String,
    UnicodeString,
    HexString,
    True,
    False,

    // Elementary type keywords (post-processed from IDENTIFIER, spec.md §4.1)
    Int,
    IntN(u16),
    Uint,
    UintN(u16),
    Bytes,
    BytesN(u16),
    Fixed,
    FixedMN(u16, u16),
    Ufixed,
    UfixedMN(u16, u16),
    Address,
    Bool,
    StringType,
    Byte,

    // Reserved keywords
    Pragma,
    Import,
    As,
    Contract,
    Abstract,
    Interface,
    Library,
    Is,
    Function,
    Constructor,
    Modifier,
    Fallback,
    Receive,
    Returns,
    Return,
    Event,
    Emit,
    Error,
    Revert,
    Struct,
    Enum,
    Mapping,
    Using,
    For,
    Type,
    New,
    Delete,
    Memory,
    Storage,
    Calldata,
    Transient,
    Public,
    Private,
    Internal,
    External,
    Pure,
    View,
    Payable,
    Constant,
    Immutable,
    Override,
    Virtual,
    Indexed,
    Anonymous,
    If,
    Else,
    While,
    Do,
    Break,
    Continue,
    Try,
    Catch,
    Assembly,
    Let,
    Unchecked,
    From,
    Global,
    Layout,
    At,

    // Punctuators / operators (spec.md §6.1)
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Semicolon,
    Dot,
    Comma,
    Question,
    Arrow,       // ->
    DoubleArrow, // =>
    Assign,      // =
    ColonEq,     // := (Yul assignment, spec.md §4.2 "Inline assembly")
    Eq,          // ==
    NotEq,       // !=
    Lt,
    Gt,
    LtEq,
    GtEq,
    Not,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    AndAnd,
    OrOr,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,
    PlusPlus,
    MinusMinus,
    Shl,    // <<
    Shr,    // >>
    Sar,    // >>>
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AndEq,
    OrEq,
    XorEq,
    ShlEq,  // <<=
    ShrEq,  // >>=
    SarEq,  // >>>=

    Eof,
    Illegal,
}

/// A single decimal/hex/string sub-denomination unit suffix recognized on number literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubDenomination {
    Wei,
    Gwei,
    Ether,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Years,
}

impl SubDenomination {
    pub fn from_lexeme(s: &str) -> Option<Self> {
        Some(match s {
            "wei" => Self::Wei,
            "gwei" => Self::Gwei,
            "ether" => Self::Ether,
            "seconds" => Self::Seconds,
            "minutes" => Self::Minutes,
            "hours" => Self::Hours,
            "days" => Self::Days,
            "weeks" => Self::Weeks,
            "years" => Self::Years,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The source lexeme, with numeric underscores stripped and string escapes decoded.
    pub value: String,
    /// 1-indexed line of the first character.
    pub line: usize,
    /// 0-indexed column of the first character.
    pub column: usize,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Populated only for `Number`/`HexNumber` tokens that carry a trailing sub-denomination.
    pub sub_denomination: Option<SubDenomination>,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
