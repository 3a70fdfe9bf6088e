//! Inline assembly (Yul-ish) parsing (spec.md §4.2 "Inline assembly").
//!
//! `switch`/`case`/`default`/`leave` are not reserved Solidity keywords, so the scanner leaves
//! them as plain `Identifier` tokens; this module recognizes them by lexeme, the way the
//! language itself treats them as assembly-only contextual words.

use crate::ast::{
    AssemblyAssignment, AssemblyBlock, AssemblyCall, AssemblyCase, AssemblyFor,
    AssemblyFunctionDefinition, AssemblyIdentifier, AssemblyIf, AssemblyLiteral,
    AssemblyLocalDefinition, AssemblySwitch, InlineAssembly, Node,
};
use crate::scanner::TokenKind;

use super::{Builder, PResult};

impl Builder {
    pub(crate) fn parse_inline_assembly(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'assembly'
        let dialect = if self.check(TokenKind::String) {
            Some(self.advance().value)
        } else {
            None
        };
        let body = self.parse_assembly_block()?;
        Ok(Node::InlineAssembly(InlineAssembly {
            meta: self.meta_from_start(&start),
            dialect,
            body: Box::new(body),
        }))
    }

    fn parse_assembly_block(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.expect(TokenKind::LBrace, "{")?;
        let mut operations = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            operations.push(self.parse_assembly_item()?);
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Node::AssemblyBlock(AssemblyBlock {
            meta: self.meta_from_start(&start),
            operations,
        }))
    }

    fn parse_assembly_item(&mut self) -> PResult<Node> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::LBrace => self.parse_assembly_block(),
            TokenKind::Let => self.parse_assembly_local_definition(),
            TokenKind::If => self.parse_assembly_if(),
            TokenKind::For => self.parse_assembly_for(),
            TokenKind::Function => self.parse_assembly_function_definition(),
            TokenKind::Break | TokenKind::Continue => {
                self.advance();
                Ok(Node::AssemblyIdentifier(AssemblyIdentifier {
                    meta: self.meta_from_start(&tok),
                    name: tok.value,
                }))
            }
            TokenKind::Identifier if tok.value == "switch" => self.parse_assembly_switch(),
            TokenKind::Identifier if tok.value == "leave" => {
                self.advance();
                Ok(Node::AssemblyIdentifier(AssemblyIdentifier {
                    meta: self.meta_from_start(&tok),
                    name: tok.value,
                }))
            }
            _ => self.parse_assembly_call_or_assignment(),
        }
    }

    fn parse_assembly_identifier(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let name = self.parse_identifier_like_name()?;
        Ok(Node::AssemblyIdentifier(AssemblyIdentifier {
            meta: self.meta_from_start(&start),
            name,
        }))
    }

    fn parse_assembly_local_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'let'
        let mut names = vec![self.parse_assembly_identifier()?];
        while self.match_token(TokenKind::Comma) {
            names.push(self.parse_assembly_identifier()?);
        }
        let expression = if self.match_token(TokenKind::ColonEq) {
            Some(Box::new(self.parse_assembly_expression()?))
        } else {
            None
        };
        Ok(Node::AssemblyLocalDefinition(AssemblyLocalDefinition {
            meta: self.meta_from_start(&start),
            names,
            expression,
        }))
    }

    /// A bare name is either a multi-assignment `a, b := f()`, a single assignment `a := f()`,
    /// or a call used as a statement, `f(a, b)`.
    fn parse_assembly_call_or_assignment(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let first = self.parse_assembly_identifier()?;

        if self.check(TokenKind::Comma) {
            let mut names = vec![first];
            while self.match_token(TokenKind::Comma) {
                names.push(self.parse_assembly_identifier()?);
            }
            self.expect(TokenKind::ColonEq, ":=")?;
            let expression = self.parse_assembly_expression()?;
            return Ok(Node::AssemblyAssignment(AssemblyAssignment {
                meta: self.meta_from_start(&start),
                names,
                expression: Box::new(expression),
            }));
        }

        if self.match_token(TokenKind::ColonEq) {
            let expression = self.parse_assembly_expression()?;
            return Ok(Node::AssemblyAssignment(AssemblyAssignment {
                meta: self.meta_from_start(&start),
                names: vec![first],
                expression: Box::new(expression),
            }));
        }

        if self.check(TokenKind::LParen) {
            let name = match &first {
                Node::AssemblyIdentifier(id) => id.name.clone(),
                _ => unreachable!("parse_assembly_identifier always returns AssemblyIdentifier"),
            };
            return self.parse_assembly_call_tail(start, name);
        }

        Ok(first)
    }

    fn parse_assembly_call_tail(
        &mut self,
        start: crate::scanner::Token,
        function_name: String,
    ) -> PResult<Node> {
        self.expect(TokenKind::LParen, "(")?;
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                arguments.push(self.parse_assembly_expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, ")")?;
        Ok(Node::AssemblyCall(AssemblyCall {
            meta: self.meta_from_start(&start),
            function_name,
            arguments,
        }))
    }

    fn parse_assembly_expression(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        if self.check_any(&[TokenKind::Number, TokenKind::HexNumber]) {
            let tok = self.advance();
            return Ok(Node::AssemblyLiteral(AssemblyLiteral {
                meta: self.meta_from_start(&start),
                kind: "number".to_string(),
                value: tok.value,
            }));
        }
        if self.check_any(&[TokenKind::String, TokenKind::HexString]) {
            let tok = self.advance();
            return Ok(Node::AssemblyLiteral(AssemblyLiteral {
                meta: self.meta_from_start(&start),
                kind: "string".to_string(),
                value: tok.value,
            }));
        }
        if self.check_any(&[TokenKind::True, TokenKind::False]) {
            let tok = self.advance();
            return Ok(Node::AssemblyLiteral(AssemblyLiteral {
                meta: self.meta_from_start(&start),
                kind: "boolean".to_string(),
                value: tok.value,
            }));
        }
        let name = self.parse_identifier_like_name()?;
        if self.check(TokenKind::Dot) {
            // `a.b` member-style path used to reference a Solidity-level declaration from
            // inside assembly; folded into one dotted name since this crate has no dedicated
            // assembly member-access node.
            let mut full = name;
            while self.match_token(TokenKind::Dot) {
                full.push('.');
                full.push_str(&self.parse_identifier_like_name()?);
            }
            if self.check(TokenKind::LParen) {
                return self.parse_assembly_call_tail(start, full);
            }
            return Ok(Node::AssemblyIdentifier(AssemblyIdentifier {
                meta: self.meta_from_start(&start),
                name: full,
            }));
        }
        if self.check(TokenKind::LParen) {
            return self.parse_assembly_call_tail(start, name);
        }
        Ok(Node::AssemblyIdentifier(AssemblyIdentifier {
            meta: self.meta_from_start(&start),
            name,
        }))
    }

    fn parse_assembly_if(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'if'
        let condition = self.parse_assembly_expression()?;
        let body = self.parse_assembly_block()?;
        Ok(Node::AssemblyIf(AssemblyIf {
            meta: self.meta_from_start(&start),
            condition: Box::new(condition),
            body: Box::new(body),
        }))
    }

    fn parse_assembly_switch(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'switch' (a plain Identifier token recognized by lexeme)
        let expression = self.parse_assembly_expression()?;
        let mut cases = Vec::new();
        loop {
            let tok = self.peek().clone();
            if tok.kind == TokenKind::Identifier && tok.value == "case" {
                self.advance();
                let value = self.parse_assembly_expression()?;
                let body = self.parse_assembly_block()?;
                cases.push(Node::AssemblyCase(AssemblyCase {
                    meta: self.meta_from_start(&tok),
                    value: Some(Box::new(value)),
                    body: Box::new(body),
                    is_default: false,
                }));
            } else if tok.kind == TokenKind::Identifier && tok.value == "default" {
                self.advance();
                let body = self.parse_assembly_block()?;
                cases.push(Node::AssemblyCase(AssemblyCase {
                    meta: self.meta_from_start(&tok),
                    value: None,
                    body: Box::new(body),
                    is_default: true,
                }));
                break;
            } else {
                break;
            }
        }
        Ok(Node::AssemblySwitch(AssemblySwitch {
            meta: self.meta_from_start(&start),
            expression: Box::new(expression),
            cases,
        }))
    }

    fn parse_assembly_for(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'for'
        let pre = self.parse_assembly_block()?;
        let condition = self.parse_assembly_expression()?;
        let post = self.parse_assembly_block()?;
        let body = self.parse_assembly_block()?;
        Ok(Node::AssemblyFor(AssemblyFor {
            meta: self.meta_from_start(&start),
            pre: Box::new(pre),
            condition: Box::new(condition),
            post: Box::new(post),
            body: Box::new(body),
        }))
    }

    fn parse_assembly_function_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'function'
        let name = self.parse_identifier_like_name()?;
        self.expect(TokenKind::LParen, "(")?;
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                arguments.push(self.parse_assembly_identifier()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, ")")?;

        let mut return_arguments = Vec::new();
        if self.match_token(TokenKind::Arrow) {
            loop {
                return_arguments.push(self.parse_assembly_identifier()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        let body = self.parse_assembly_block()?;
        Ok(Node::AssemblyFunctionDefinition(AssemblyFunctionDefinition {
            meta: self.meta_from_start(&start),
            name,
            arguments,
            return_arguments,
            body: Box::new(body),
        }))
    }
}
