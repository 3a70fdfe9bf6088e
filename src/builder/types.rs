//! Type-name parsing (spec.md §4.2 "Mapping types" and the type-name production referenced
//! throughout "State-variable, parameter, and struct-member parsing").

use crate::ast::{ArrayTypeName, ElementaryTypeName, FunctionTypeName, Mapping, Node, UserDefinedTypeName};
use crate::scanner::TokenKind;

use super::{Builder, PResult};

impl Builder {
    /// `typeName`: elementary type, `mapping(...)`, `function(...) ...`, or a dotted
    /// user-defined type path, followed by zero or more `[]`/`[N]` array dimensions.
    pub(crate) fn parse_type_name(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut base = if self.check(TokenKind::Mapping) {
            self.parse_mapping_type()?
        } else if self.check(TokenKind::Function) {
            self.parse_function_type_name()?
        } else if let Some(name) = elementary_name(&self.peek().kind) {
            self.advance();
            let mut state_mutability = None;
            if name == "address" && self.check(TokenKind::Payable) {
                self.advance();
                state_mutability = Some("payable".to_string());
            }
            Node::ElementaryTypeName(ElementaryTypeName {
                meta: self.meta_from_start(&start),
                name,
                state_mutability,
            })
        } else {
            let path = self.parse_dotted_identifier_path()?;
            Node::UserDefinedTypeName(UserDefinedTypeName {
                meta: self.meta_from_start(&start),
                name_path: path,
            })
        };

        while self.check(TokenKind::LBracket) {
            self.advance();
            let length = if self.check(TokenKind::RBracket) {
                None
            } else {
                Some(Box::new(self.parse_expression()?))
            };
            self.expect(TokenKind::RBracket, "]")?;
            base = Node::ArrayTypeName(ArrayTypeName {
                meta: self.meta_from_start(&start),
                base_type_name: Box::new(base),
                length,
            });
        }

        Ok(base)
    }

    fn parse_mapping_type(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'mapping'
        self.expect(TokenKind::LParen, "(")?;
        let key_type = Box::new(self.parse_type_name()?);
        let key_name = if self.is_identifier_like() && !self.check(TokenKind::DoubleArrow) {
            Some(Box::new(self.parse_identifier_like()?))
        } else {
            None
        };
        self.expect(TokenKind::DoubleArrow, "=>")?;
        let value_type = Box::new(self.parse_type_name()?);
        let value_name = if self.is_identifier_like() && !self.check(TokenKind::RParen) {
            Some(Box::new(self.parse_identifier_like()?))
        } else {
            None
        };
        self.expect(TokenKind::RParen, ")")?;
        Ok(Node::Mapping(Mapping {
            meta: self.meta_from_start(&start),
            key_type,
            key_name,
            value_type,
            value_name,
        }))
    }

    fn parse_function_type_name(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'function'
        self.expect(TokenKind::LParen, "(")?;
        let mut parameter_types = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                parameter_types.push(self.parse_type_name()?);
                // a storage-location keyword may follow a parameter type in a function-type
                // signature; it carries no type-level meaning for this closed node set.
                if self.check_any(&[TokenKind::Memory, TokenKind::Storage, TokenKind::Calldata]) {
                    self.advance();
                }
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, ")")?;

        let mut visibility = String::new();
        if self.check_any(&[
            TokenKind::Internal,
            TokenKind::External,
            TokenKind::Public,
            TokenKind::Private,
        ]) {
            visibility = self.advance().value;
        }
        let mut state_mutability = String::new();
        if self.check_any(&[TokenKind::Pure, TokenKind::View, TokenKind::Payable]) {
            state_mutability = self.advance().value;
        }

        let mut return_types = Vec::new();
        if self.match_token(TokenKind::Returns) {
            self.expect(TokenKind::LParen, "(")?;
            if !self.check(TokenKind::RParen) {
                loop {
                    return_types.push(self.parse_type_name()?);
                    if self.check_any(&[TokenKind::Memory, TokenKind::Storage, TokenKind::Calldata]) {
                        self.advance();
                    }
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen, ")")?;
        }

        Ok(Node::FunctionTypeName(FunctionTypeName {
            meta: self.meta_from_start(&start),
            parameter_types,
            return_types,
            visibility,
            state_mutability,
        }))
    }

    /// `a.b.c` — a dotted user-defined type path.
    pub(crate) fn parse_dotted_identifier_path(&mut self) -> PResult<String> {
        let mut path = self.parse_identifier_like_name()?;
        while self.check(TokenKind::Dot) {
            self.advance();
            path.push('.');
            path.push_str(&self.parse_identifier_like_name()?);
        }
        Ok(path)
    }
}

/// A token is "identifier-like" if it is a plain identifier or one of the contextual keywords
/// that the grammar re-accepts as a name (spec.md §4.1 "Contextual keywords").
pub(crate) fn is_identifier_like_kind(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::From
            | TokenKind::Error
            | TokenKind::Revert
            | TokenKind::Global
            | TokenKind::Transient
            | TokenKind::Layout
            | TokenKind::At
    )
}

/// The source-lexeme spelling of an elementary type keyword, including sized forms.
pub(crate) fn elementary_name(kind: &TokenKind) -> Option<String> {
    Some(match kind {
        TokenKind::Address => "address".to_string(),
        TokenKind::Bool => "bool".to_string(),
        TokenKind::StringType => "string".to_string(),
        TokenKind::Byte => "byte".to_string(),
        TokenKind::Int => "int".to_string(),
        TokenKind::IntN(n) => format!("int{n}"),
        TokenKind::Uint => "uint".to_string(),
        TokenKind::UintN(n) => format!("uint{n}"),
        TokenKind::Bytes => "bytes".to_string(),
        TokenKind::BytesN(n) => format!("bytes{n}"),
        TokenKind::Fixed => "fixed".to_string(),
        TokenKind::FixedMN(m, n) => format!("fixed{m}x{n}"),
        TokenKind::Ufixed => "ufixed".to_string(),
        TokenKind::UfixedMN(m, n) => format!("ufixed{m}x{n}"),
        _ => return None,
    })
}
