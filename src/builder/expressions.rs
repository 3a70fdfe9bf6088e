//! Expression parsing: the sixteen precedence levels and primary expressions
//! (spec.md §4.2 "Expressions — precedence", "Primary expressions", "Tuple vs. parenthesized
//! disambiguation").

use crate::ast::{
    BinaryOperation, BooleanLiteral, Conditional, ElementaryTypeName, FunctionCall,
    FunctionCallOptions, HexLiteral, IndexAccess, IndexRangeAccess, MemberAccess, NewExpression,
    Node, NumberLiteral, StringLiteral, TupleExpression, UnaryOperation,
};
use crate::scanner::TokenKind;

use super::types::elementary_name;
use super::{Builder, PResult};

const ASSIGNMENT_OPS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::PlusEq,
    TokenKind::MinusEq,
    TokenKind::StarEq,
    TokenKind::SlashEq,
    TokenKind::PercentEq,
    TokenKind::AndEq,
    TokenKind::OrEq,
    TokenKind::XorEq,
    TokenKind::ShlEq,
    TokenKind::ShrEq,
    TokenKind::SarEq,
];

impl Builder {
    pub(crate) fn parse_expression(&mut self) -> PResult<Node> {
        self.parse_assignment()
    }

    // Level 1: assignment, right-associative.
    fn parse_assignment(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let left = self.parse_conditional()?;
        if self.check_any(ASSIGNMENT_OPS) {
            let op = self.advance();
            let right = self.parse_assignment()?;
            return Ok(Node::BinaryOperation(BinaryOperation {
                meta: self.meta_from_start(&start),
                operator: op.value,
                left: Box::new(left),
                right: Box::new(right),
            }));
        }
        Ok(left)
    }

    // Level 2: `?:`, right-associative.
    fn parse_conditional(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let condition = self.parse_or()?;
        if self.match_token(TokenKind::Question) {
            let true_expression = self.parse_expression()?;
            self.expect(TokenKind::Colon, ":")?;
            let false_expression = self.parse_expression()?;
            return Ok(Node::Conditional(Conditional {
                meta: self.meta_from_start(&start),
                condition: Box::new(condition),
                true_expression: Box::new(true_expression),
                false_expression: Box::new(false_expression),
            }));
        }
        Ok(condition)
    }

    // Level 3: `||`, left-associative.
    fn parse_or(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_and()?;
        while self.check(TokenKind::OrOr) {
            let op = self.advance();
            let right = self.parse_and()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 4: `&&`, left-associative.
    fn parse_and(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_equality()?;
        while self.check(TokenKind::AndAnd) {
            let op = self.advance();
            let right = self.parse_equality()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 5: `== !=`, left-associative.
    fn parse_equality(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_relational()?;
        while self.check_any(&[TokenKind::Eq, TokenKind::NotEq]) {
            let op = self.advance();
            let right = self.parse_relational()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 6: `< <= > >=`, left-associative.
    fn parse_relational(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_bit_or()?;
        while self.check_any(&[TokenKind::Lt, TokenKind::LtEq, TokenKind::Gt, TokenKind::GtEq]) {
            let op = self.advance();
            let right = self.parse_bit_or()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 7: `|`, left-associative.
    fn parse_bit_or(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_bit_xor()?;
        while self.check(TokenKind::BitOr) {
            let op = self.advance();
            let right = self.parse_bit_xor()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 8: `^`, left-associative.
    fn parse_bit_xor(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_bit_and()?;
        while self.check(TokenKind::BitXor) {
            let op = self.advance();
            let right = self.parse_bit_and()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 9: `&`, left-associative.
    fn parse_bit_and(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_shift()?;
        while self.check(TokenKind::BitAnd) {
            let op = self.advance();
            let right = self.parse_shift()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 10: `<< >> >>>`, left-associative.
    fn parse_shift(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_additive()?;
        while self.check_any(&[TokenKind::Shl, TokenKind::Shr, TokenKind::Sar]) {
            let op = self.advance();
            let right = self.parse_additive()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 11: `+ -`, left-associative.
    fn parse_additive(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_multiplicative()?;
        while self.check_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = self.advance();
            let right = self.parse_multiplicative()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 12: `* / %`, left-associative.
    fn parse_multiplicative(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut left = self.parse_exponent()?;
        while self.check_any(&[TokenKind::Star, TokenKind::Slash, TokenKind::Percent]) {
            let op = self.advance();
            let right = self.parse_exponent()?;
            left = self.bin_op(start.clone(), op.value, left, right);
        }
        Ok(left)
    }

    // Level 13: `**`, right-associative.
    fn parse_exponent(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let left = self.parse_unary()?;
        if self.check(TokenKind::StarStar) {
            let op = self.advance();
            let right = self.parse_exponent()?;
            return Ok(self.bin_op(start, op.value, left, right));
        }
        Ok(left)
    }

    // Level 14: prefix `! ~ - + ++ -- delete`, right-associative.
    fn parse_unary(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let is_prefix_op = self.check_any(&[
            TokenKind::Not,
            TokenKind::BitNot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Delete,
        ]);
        if is_prefix_op {
            let op = self.advance();
            let operand = self.parse_unary()?;
            return Ok(Node::UnaryOperation(UnaryOperation {
                meta: self.meta_from_start(&start),
                operator: op.value,
                sub_expression: Box::new(operand),
                is_prefix: true,
            }));
        }
        self.parse_postfix()
    }

    // Level 15: postfix `++ --`, left-associative.
    fn parse_postfix(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut expr = self.parse_call_suffixes()?;
        while self.check_any(&[TokenKind::PlusPlus, TokenKind::MinusMinus]) {
            let op = self.advance();
            expr = Node::UnaryOperation(UnaryOperation {
                meta: self.meta_from_start(&start),
                operator: op.value,
                sub_expression: Box::new(expr),
                is_prefix: false,
            });
        }
        Ok(expr)
    }

    // Level 16: `.member`, `[index]`, `[start:end]`, `(args)`, `{call options}`.
    fn parse_call_suffixes(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut expr = self.parse_primary()?;
        loop {
            if self.match_token(TokenKind::Dot) {
                let member_name = self.parse_identifier_like_name()?;
                expr = Node::MemberAccess(MemberAccess {
                    meta: self.meta_from_start(&start),
                    expression: Box::new(expr),
                    member_name,
                });
            } else if self.match_token(TokenKind::LBracket) {
                expr = self.parse_index_suffix(start.clone(), expr)?;
            } else if self.match_token(TokenKind::LParen) {
                let (arguments, names) = self.parse_call_arguments()?;
                self.expect(TokenKind::RParen, ")")?;
                expr = Node::FunctionCall(FunctionCall {
                    meta: self.meta_from_start(&start),
                    expression: Box::new(expr),
                    arguments,
                    names,
                });
            } else if self.check(TokenKind::LBrace) && self.call_options_allowed() {
                let (options, names) = self.parse_call_options()?;
                expr = Node::FunctionCallOptions(FunctionCallOptions {
                    meta: self.meta_from_start(&start),
                    expression: Box::new(expr),
                    options,
                    names,
                });
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_index_suffix(&mut self, start: crate::scanner::Token, base: Node) -> PResult<Node> {
        if self.match_token(TokenKind::Colon) {
            let index_end = if self.check(TokenKind::RBracket) {
                None
            } else {
                Some(Box::new(self.parse_expression()?))
            };
            self.expect(TokenKind::RBracket, "]")?;
            return Ok(Node::IndexRangeAccess(IndexRangeAccess {
                meta: self.meta_from_start(&start),
                base: Box::new(base),
                index_start: None,
                index_end,
            }));
        }
        if self.check(TokenKind::RBracket) {
            self.advance();
            return Ok(Node::IndexAccess(IndexAccess {
                meta: self.meta_from_start(&start),
                base: Box::new(base),
                index: None,
            }));
        }
        let first = self.parse_expression()?;
        if self.match_token(TokenKind::Colon) {
            let index_end = if self.check(TokenKind::RBracket) {
                None
            } else {
                Some(Box::new(self.parse_expression()?))
            };
            self.expect(TokenKind::RBracket, "]")?;
            return Ok(Node::IndexRangeAccess(IndexRangeAccess {
                meta: self.meta_from_start(&start),
                base: Box::new(base),
                index_start: Some(Box::new(first)),
                index_end,
            }));
        }
        self.expect(TokenKind::RBracket, "]")?;
        Ok(Node::IndexAccess(IndexAccess {
            meta: self.meta_from_start(&start),
            base: Box::new(base),
            index: Some(Box::new(first)),
        }))
    }

    /// Positional `(a, b)` or the named-argument-call object form `({a: 1, b: 2})`.
    fn parse_call_arguments(&mut self) -> PResult<(Vec<Node>, Vec<String>)> {
        if self.check(TokenKind::RParen) {
            return Ok((Vec::new(), Vec::new()));
        }
        if self.check(TokenKind::LBrace) {
            return self.parse_call_options();
        }
        let mut args = Vec::new();
        loop {
            args.push(self.parse_expression()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        Ok((args, Vec::new()))
    }

    fn parse_call_options(&mut self) -> PResult<(Vec<Node>, Vec<String>)> {
        self.expect(TokenKind::LBrace, "{")?;
        let mut values = Vec::new();
        let mut names = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                names.push(self.parse_identifier_like_name()?);
                self.expect(TokenKind::Colon, ":")?;
                values.push(self.parse_expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok((values, names))
    }

    fn parse_primary(&mut self) -> PResult<Node> {
        let start = self.peek().clone();

        if self.match_token(TokenKind::True) {
            return Ok(Node::BooleanLiteral(BooleanLiteral {
                meta: self.meta_from_start(&start),
                value: true,
            }));
        }
        if self.match_token(TokenKind::False) {
            return Ok(Node::BooleanLiteral(BooleanLiteral {
                meta: self.meta_from_start(&start),
                value: false,
            }));
        }
        if self.check_any(&[TokenKind::Number, TokenKind::HexNumber]) {
            let tok = self.advance();
            let sub_denomination = tok.sub_denomination.map(|d| format!("{d:?}").to_lowercase());
            return Ok(Node::NumberLiteral(NumberLiteral {
                meta: self.meta_from_start(&start),
                number: tok.value,
                sub_denomination,
            }));
        }
        if self.check(TokenKind::HexString) {
            return self.parse_hex_literal();
        }
        if self.check_any(&[TokenKind::String, TokenKind::UnicodeString]) {
            return self.parse_string_literal();
        }
        if self.match_token(TokenKind::New) {
            let type_name = self.parse_type_name()?;
            return Ok(Node::NewExpression(NewExpression {
                meta: self.meta_from_start(&start),
                type_name: Box::new(type_name),
            }));
        }
        if self.check(TokenKind::Payable) {
            self.advance();
            return Ok(Node::ElementaryTypeName(ElementaryTypeName {
                meta: self.meta_from_start(&start),
                name: "address".to_string(),
                state_mutability: Some("payable".to_string()),
            }));
        }
        if self.check(TokenKind::Type) {
            let tok = self.advance();
            return Ok(Node::Identifier(crate::ast::Identifier {
                meta: self.meta_from_start(&start),
                name: tok.value,
            }));
        }
        if let Some(name) = elementary_name(&self.peek().kind) {
            self.advance();
            return Ok(Node::ElementaryTypeName(ElementaryTypeName {
                meta: self.meta_from_start(&start),
                name,
                state_mutability: None,
            }));
        }
        if self.check(TokenKind::LParen) {
            return self.parse_tuple_or_parenthesized();
        }
        if self.check(TokenKind::LBracket) {
            return self.parse_array_literal();
        }
        if self.is_identifier_like() {
            return self.parse_identifier_like();
        }

        let tok = self.peek().clone();
        self.advance();
        self.record_error(super::ParserError::expected("expression", &tok))?;
        Ok(Node::Identifier(crate::ast::Identifier {
            meta: self.meta_from_start(&start),
            name: tok.value,
        }))
    }

    fn parse_tuple_or_parenthesized(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.expect(TokenKind::LParen, "(")?;
        if self.match_token(TokenKind::RParen) {
            return Ok(Node::TupleExpression(TupleExpression {
                meta: self.meta_from_start(&start),
                components: Vec::new(),
                is_array: false,
            }));
        }

        let first = if self.check(TokenKind::Comma) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        if self.check(TokenKind::Comma) {
            let mut components = vec![first];
            while self.match_token(TokenKind::Comma) {
                if self.check_any(&[TokenKind::Comma, TokenKind::RParen]) {
                    components.push(None);
                } else {
                    components.push(Some(self.parse_expression()?));
                }
            }
            self.expect(TokenKind::RParen, ")")?;
            return Ok(Node::TupleExpression(TupleExpression {
                meta: self.meta_from_start(&start),
                components,
                is_array: false,
            }));
        }

        self.expect(TokenKind::RParen, ")")?;
        Ok(first.expect("non-tuple parenthesized form always parses an inner expression"))
    }

    fn parse_array_literal(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.expect(TokenKind::LBracket, "[")?;
        let mut components = Vec::new();
        if !self.check(TokenKind::RBracket) {
            loop {
                components.push(Some(self.parse_expression()?));
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBracket, "]")?;
        Ok(Node::TupleExpression(TupleExpression {
            meta: self.meta_from_start(&start),
            components,
            is_array: true,
        }))
    }

    /// Adjacent `"..."`/`unicode"..."` literals concatenate into one node (spec.md §8 law 7).
    fn parse_string_literal(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let is_unicode = self.check(TokenKind::UnicodeString);
        let mut parts = Vec::new();
        while self.check_any(&[TokenKind::String, TokenKind::UnicodeString]) {
            parts.push(self.advance().value);
        }
        Ok(Node::StringLiteral(StringLiteral {
            meta: self.meta_from_start(&start),
            parts,
            is_unicode,
        }))
    }

    fn parse_hex_literal(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut parts = Vec::new();
        while self.check(TokenKind::HexString) {
            parts.push(self.advance().value);
        }
        Ok(Node::HexLiteral(HexLiteral {
            meta: self.meta_from_start(&start),
            parts,
        }))
    }

    fn bin_op(&self, start: crate::scanner::Token, operator: String, left: Node, right: Node) -> Node {
        Node::BinaryOperation(BinaryOperation {
            meta: self.meta_from_start(&start),
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
