//! Fixed keyword table and sized-primitive-type post-processing (spec.md §4.1).

use super::token::TokenKind;

/// Look up a scanned identifier against the fixed keyword table.
///
/// Sized primitive types (`uint256`, `bytes32`, `fixed128x18`, …) are recognized here too, since
/// they are lexically just identifiers until the digit suffix is inspected.
pub fn classify(ident: &str) -> TokenKind {
    match ident {
        "pragma" => return TokenKind::Pragma,
        "import" => return TokenKind::Import,
        "as" => return TokenKind::As,
        "contract" => return TokenKind::Contract,
        "abstract" => return TokenKind::Abstract,
        "interface" => return TokenKind::Interface,
        "library" => return TokenKind::Library,
        "is" => return TokenKind::Is,
        "function" => return TokenKind::Function,
        "constructor" => return TokenKind::Constructor,
        "modifier" => return TokenKind::Modifier,
        "fallback" => return TokenKind::Fallback,
        "receive" => return TokenKind::Receive,
        "returns" => return TokenKind::Returns,
        "return" => return TokenKind::Return,
        "event" => return TokenKind::Event,
        "emit" => return TokenKind::Emit,
        "error" => return TokenKind::Error,
        "revert" => return TokenKind::Revert,
        "struct" => return TokenKind::Struct,
        "enum" => return TokenKind::Enum,
        "mapping" => return TokenKind::Mapping,
        "using" => return TokenKind::Using,
        "for" => return TokenKind::For,
        "type" => return TokenKind::Type,
        "new" => return TokenKind::New,
        "delete" => return TokenKind::Delete,
        "memory" => return TokenKind::Memory,
        "storage" => return TokenKind::Storage,
        "calldata" => return TokenKind::Calldata,
        "transient" => return TokenKind::Transient,
        "public" => return TokenKind::Public,
        "private" => return TokenKind::Private,
        "internal" => return TokenKind::Internal,
        "external" => return TokenKind::External,
        "pure" => return TokenKind::Pure,
        "view" => return TokenKind::View,
        "payable" => return TokenKind::Payable,
        "constant" => return TokenKind::Constant,
        "immutable" => return TokenKind::Immutable,
        "override" => return TokenKind::Override,
        "virtual" => return TokenKind::Virtual,
        "indexed" => return TokenKind::Indexed,
        "anonymous" => return TokenKind::Anonymous,
        "if" => return TokenKind::If,
        "else" => return TokenKind::Else,
        "while" => return TokenKind::While,
        "do" => return TokenKind::Do,
        "break" => return TokenKind::Break,
        "continue" => return TokenKind::Continue,
        "try" => return TokenKind::Try,
        "catch" => return TokenKind::Catch,
        "assembly" => return TokenKind::Assembly,
        "let" => return TokenKind::Let,
        "unchecked" => return TokenKind::Unchecked,
        "from" => return TokenKind::From,
        "global" => return TokenKind::Global,
        "layout" => return TokenKind::Layout,
        "at" => return TokenKind::At,
        "true" => return TokenKind::True,
        "false" => return TokenKind::False,
        "address" => return TokenKind::Address,
        "bool" => return TokenKind::Bool,
        "string" => return TokenKind::StringType,
        "byte" => return TokenKind::Byte,
        _ => {}
    }

    if let Some(kind) = classify_sized(ident) {
        return kind;
    }

    TokenKind::Identifier
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Recognize `int<N>`, `uint<N>`, `bytes<N>`, `fixed<M>x<N>`, `ufixed<M>x<N>`.
fn classify_sized(ident: &str) -> Option<TokenKind> {
    if ident == "int" {
        return Some(TokenKind::Int);
    }
    if ident == "uint" {
        return Some(TokenKind::Uint);
    }
    if ident == "bytes" {
        return Some(TokenKind::Bytes);
    }
    if ident == "fixed" {
        return Some(TokenKind::Fixed);
    }
    if ident == "ufixed" {
        return Some(TokenKind::Ufixed);
    }

    if let Some(rest) = ident.strip_prefix("uint") {
        if all_digits(rest) {
            return Some(TokenKind::UintN(rest.parse().ok()?));
        }
    }
    if let Some(rest) = ident.strip_prefix("int") {
        if all_digits(rest) {
            return Some(TokenKind::IntN(rest.parse().ok()?));
        }
    }
    if let Some(rest) = ident.strip_prefix("bytes") {
        if all_digits(rest) {
            return Some(TokenKind::BytesN(rest.parse().ok()?));
        }
    }
    if let Some(rest) = ident.strip_prefix("ufixed") {
        if let Some((m, n)) = split_mxn(rest) {
            return Some(TokenKind::UfixedMN(m, n));
        }
    }
    if let Some(rest) = ident.strip_prefix("fixed") {
        if let Some((m, n)) = split_mxn(rest) {
            return Some(TokenKind::FixedMN(m, n));
        }
    }

    None
}

/// Split a `<M>x<N>` suffix (e.g. `"128x18"`) into its two digit groups.
fn split_mxn(rest: &str) -> Option<(u16, u16)> {
    let x = rest.find('x')?;
    let (m, n) = (&rest[..x], &rest[x + 1..]);
    if all_digits(m) && all_digits(n) {
        Some((m.parse().ok()?, n.parse().ok()?))
    } else {
        None
    }
}
