//! Contract/interface/library/abstract-contract header and body parsing (spec.md §4.2 "Contract
//! body dispatch", "using directives", "Layout directive").

use crate::ast::{
    ContractDefinition, InheritanceSpecifier, Node, UserDefinedTypeName, UsingForDeclaration,
    UsingFunctionEntry,
};
use crate::scanner::TokenKind;

use super::{Builder, ParserError, PResult};

impl Builder {
    pub(crate) fn parse_contract_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let is_abstract = self.match_token(TokenKind::Abstract);

        let kind = match self.peek().kind {
            TokenKind::Contract => {
                self.advance();
                if is_abstract { "abstract".to_string() } else { "contract".to_string() }
            }
            TokenKind::Interface => {
                self.advance();
                "interface".to_string()
            }
            TokenKind::Library => {
                self.advance();
                "library".to_string()
            }
            _ => {
                let tok = self.peek().clone();
                self.advance();
                self.record_error(ParserError::expected("contract, interface, or library", &tok))?;
                "contract".to_string()
            }
        };

        let name = self.parse_identifier_like_name()?;

        let mut base_contracts = Vec::new();
        if self.match_token(TokenKind::Is) {
            loop {
                base_contracts.push(self.parse_inheritance_specifier()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        // `layout at <expr>` (0.8.24+) sits in the header, before the body brace; call-options
        // `{` is suppressed while parsing its expression so the body brace that follows isn't
        // swallowed as one (same hazard as the `try` call expression, spec.md §4.2 "Try
        // statement").
        let layout = if self.check(TokenKind::Layout) && self.peek_at(1).kind == TokenKind::At {
            self.advance(); // 'layout'
            self.advance(); // 'at'
            let was_suppressed = self.set_call_options_suppressed(true);
            let expr = self.parse_expression()?;
            self.set_call_options_suppressed(was_suppressed);
            Some(Box::new(expr))
        } else {
            None
        };

        self.expect(TokenKind::LBrace, "{")?;
        let mut sub_nodes = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            match self.parse_contract_body_item() {
                Ok(node) => {
                    log::debug!("committed contract sub-node {}", node.kind());
                    sub_nodes.push(node);
                }
                Err(err) => {
                    if !self.options().tolerant {
                        return Err(err);
                    }
                    self.synchronize();
                }
            }
        }
        self.expect(TokenKind::RBrace, "}")?;

        Ok(Node::ContractDefinition(ContractDefinition {
            meta: self.meta_from_start(&start),
            name,
            kind,
            base_contracts,
            sub_nodes,
            layout,
        }))
    }

    fn parse_inheritance_specifier(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let path = self.parse_dotted_identifier_path()?;
        let base_name = Node::UserDefinedTypeName(UserDefinedTypeName {
            meta: self.meta_from_start(&start),
            name_path: path,
        });
        let arguments = if self.match_token(TokenKind::LParen) {
            let mut args = Vec::new();
            if !self.check(TokenKind::RParen) {
                loop {
                    args.push(self.parse_expression()?);
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen, ")")?;
            args
        } else {
            Vec::new()
        };
        Ok(Node::InheritanceSpecifier(InheritanceSpecifier {
            meta: self.meta_from_start(&start),
            base_name: Box::new(base_name),
            arguments,
        }))
    }

    fn parse_contract_body_item(&mut self) -> PResult<Node> {
        match self.peek().kind {
            TokenKind::Function | TokenKind::Constructor | TokenKind::Fallback | TokenKind::Receive => {
                self.parse_function_definition()
            }
            TokenKind::Modifier => self.parse_modifier_definition(),
            TokenKind::Struct => self.parse_struct_definition(),
            TokenKind::Enum => self.parse_enum_definition(),
            TokenKind::Event => self.parse_event_definition(),
            TokenKind::Error => self.parse_error_definition(),
            TokenKind::Using => self.parse_using_for_declaration(),
            TokenKind::Type => self.parse_user_defined_value_type_definition(),
            _ => self.parse_state_variable_declaration(),
        }
    }

    /// `using Lib for Type;` / `using {fn1 as op, fn2} for Type;`, either optionally `global` and
    /// either with a concrete `Type` or the `*` wildcard (spec.md §4.2 "using directives").
    pub(crate) fn parse_using_for_declaration(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'using'

        let (library_name, function_list) = if self.match_token(TokenKind::LBrace) {
            let mut list = Vec::new();
            if !self.check(TokenKind::RBrace) {
                loop {
                    let function = self.parse_dotted_identifier_path()?;
                    let operator = if self.match_token(TokenKind::As) {
                        Some(self.advance().value)
                    } else {
                        None
                    };
                    list.push(UsingFunctionEntry { function, operator });
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RBrace, "}")?;
            (None, list)
        } else {
            (Some(self.parse_dotted_identifier_path()?), Vec::new())
        };

        self.expect(TokenKind::For, "for")?;
        let type_name = if self.match_token(TokenKind::Star) {
            None
        } else {
            Some(Box::new(self.parse_type_name()?))
        };
        let is_global = self.match_token(TokenKind::Global);
        self.expect(TokenKind::Semicolon, ";")?;

        Ok(Node::UsingForDeclaration(UsingForDeclaration {
            meta: self.meta_from_start(&start),
            library_name,
            function_list,
            type_name,
            is_global,
        }))
    }
}
