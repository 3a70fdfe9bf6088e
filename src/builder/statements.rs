//! Statement parsing (spec.md §4.2 "Statements", "Try statement", "looksLikeVariableDeclaration").

use crate::ast::{
    Block, BreakStatement, CatchClause, ContinueStatement, DoWhileStatement, EmitStatement,
    ExpressionStatement, ForStatement, IfStatement, Node, ReturnStatement, RevertStatement,
    TryStatement, UncheckedBlock, VariableDeclaration, VariableDeclarationStatement,
    WhileStatement,
};
use crate::scanner::TokenKind;

use super::{Builder, PResult};

impl Builder {
    pub(crate) fn parse_statement(&mut self) -> PResult<Node> {
        match self.peek().kind {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Unchecked => self.parse_unchecked_block(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Do => self.parse_do_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Continue => self.parse_continue_statement(),
            TokenKind::Break => self.parse_break_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Emit => self.parse_emit_statement(),
            TokenKind::Revert => self.parse_revert_statement(),
            TokenKind::Try => self.parse_try_statement(),
            TokenKind::Assembly => self.parse_inline_assembly(),
            _ => {
                if self.looks_like_variable_declaration() {
                    self.parse_variable_declaration_statement()
                } else {
                    self.parse_expression_statement()
                }
            }
        }
    }

    pub(crate) fn parse_block(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.expect(TokenKind::LBrace, "{")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    if !self.options().tolerant {
                        return Err(err);
                    }
                    self.synchronize();
                }
            }
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Node::Block(Block {
            meta: self.meta_from_start(&start),
            statements,
        }))
    }

    fn parse_unchecked_block(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'unchecked'
        self.expect(TokenKind::LBrace, "{")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    if !self.options().tolerant {
                        return Err(err);
                    }
                    self.synchronize();
                }
            }
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Node::UncheckedBlock(UncheckedBlock {
            meta: self.meta_from_start(&start),
            statements,
        }))
    }

    fn parse_if_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'if'
        self.expect(TokenKind::LParen, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, ")")?;
        let true_body = self.parse_statement()?;
        let false_body = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Node::IfStatement(IfStatement {
            meta: self.meta_from_start(&start),
            condition: Box::new(condition),
            true_body: Box::new(true_body),
            false_body,
        }))
    }

    fn parse_while_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'while'
        self.expect(TokenKind::LParen, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, ")")?;
        let body = self.parse_statement()?;
        Ok(Node::WhileStatement(WhileStatement {
            meta: self.meta_from_start(&start),
            condition: Box::new(condition),
            body: Box::new(body),
        }))
    }

    fn parse_do_while_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'do'
        let body = self.parse_statement()?;
        self.expect(TokenKind::While, "while")?;
        self.expect(TokenKind::LParen, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, ")")?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::DoWhileStatement(DoWhileStatement {
            meta: self.meta_from_start(&start),
            condition: Box::new(condition),
            body: Box::new(body),
        }))
    }

    fn parse_for_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'for'
        self.expect(TokenKind::LParen, "(")?;

        let init_expression = if self.match_token(TokenKind::Semicolon) {
            None
        } else if self.looks_like_variable_declaration() {
            Some(Box::new(self.parse_variable_declaration_statement()?))
        } else {
            Some(Box::new(self.parse_expression_statement()?))
        };

        let condition_expression = if self.match_token(TokenKind::Semicolon) {
            None
        } else {
            let cond = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, ";")?;
            Some(Box::new(cond))
        };

        let loop_expression = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect(TokenKind::RParen, ")")?;
        let body = self.parse_statement()?;

        Ok(Node::ForStatement(ForStatement {
            meta: self.meta_from_start(&start),
            init_expression,
            condition_expression,
            loop_expression,
            body: Box::new(body),
        }))
    }

    fn parse_continue_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance();
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::ContinueStatement(ContinueStatement {
            meta: self.meta_from_start(&start),
        }))
    }

    fn parse_break_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance();
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::BreakStatement(BreakStatement {
            meta: self.meta_from_start(&start),
        }))
    }

    fn parse_return_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'return'
        let expression = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::ReturnStatement(ReturnStatement {
            meta: self.meta_from_start(&start),
            expression,
        }))
    }

    fn parse_emit_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'emit'
        let event_call = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::EmitStatement(EmitStatement {
            meta: self.meta_from_start(&start),
            event_call: Box::new(event_call),
        }))
    }

    fn parse_revert_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'revert'
        let revert_call = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::RevertStatement(RevertStatement {
            meta: self.meta_from_start(&start),
            revert_call: Box::new(revert_call),
        }))
    }

    /// `try <call> (returns (...))? <block> catch (...)+` — call-options `{` is suppressed while
    /// parsing the call expression so the following block brace isn't swallowed as one (spec.md
    /// §4.2 "Try statement").
    fn parse_try_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'try'

        let was_suppressed = self.set_call_options_suppressed(true);
        let expression = self.parse_expression()?;
        self.set_call_options_suppressed(was_suppressed);

        let return_parameters = if self.match_token(TokenKind::Returns) {
            self.expect(TokenKind::LParen, "(")?;
            let mut params = Vec::new();
            if !self.check(TokenKind::RParen) {
                loop {
                    params.push(self.parse_variable_declaration(true, false)?);
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen, ")")?;
            params
        } else {
            Vec::new()
        };

        let body = self.parse_block()?;

        let mut catch_clauses = Vec::new();
        while self.check(TokenKind::Catch) {
            catch_clauses.push(self.parse_catch_clause()?);
        }

        Ok(Node::TryStatement(TryStatement {
            meta: self.meta_from_start(&start),
            expression: Box::new(expression),
            return_parameters,
            body: Box::new(body),
            catch_clauses,
        }))
    }

    fn parse_catch_clause(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'catch'

        let kind = if self.is_identifier_like() && !self.check(TokenKind::LParen) {
            self.parse_identifier_like_name()?
        } else {
            String::new()
        };

        let mut parameters = Vec::new();
        if self.match_token(TokenKind::LParen) {
            if !self.check(TokenKind::RParen) {
                loop {
                    parameters.push(self.parse_variable_declaration(true, false)?);
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen, ")")?;
        }

        let body = self.parse_block()?;
        let is_reason_string_type = kind == "Error";

        Ok(Node::CatchClause(CatchClause {
            meta: self.meta_from_start(&start),
            kind,
            parameters,
            body: Box::new(body),
            is_reason_string_type,
        }))
    }

    fn parse_expression_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let expression = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::ExpressionStatement(ExpressionStatement {
            meta: self.meta_from_start(&start),
            expression: Box::new(expression),
        }))
    }

    fn parse_variable_declaration_statement(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let variables: Vec<Option<Node>> = if self.match_token(TokenKind::LParen) {
            let mut vars = Vec::new();
            loop {
                if self.check_any(&[TokenKind::Comma, TokenKind::RParen]) {
                    vars.push(None);
                } else {
                    vars.push(Some(self.parse_variable_declaration(true, false)?));
                }
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen, ")")?;
            vars
        } else {
            vec![Some(self.parse_variable_declaration(true, false)?)]
        };

        let initial_value = if self.match_token(TokenKind::Assign) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, ";")?;

        Ok(Node::VariableDeclarationStatement(VariableDeclarationStatement {
            meta: self.meta_from_start(&start),
            variables,
            initial_value,
        }))
    }

    /// `typeName storageLocation? name?` — shared by statement-level declarations, parameter
    /// lists, struct members, and event/error parameters. `name` is optional only for the
    /// anonymous parameter-list callers (function/event/error parameters permit it).
    pub(crate) fn parse_variable_declaration(
        &mut self,
        allow_storage_location: bool,
        is_state_var: bool,
    ) -> PResult<Node> {
        let start = self.peek().clone();
        let type_name = self.parse_type_name()?;
        let storage_location = if allow_storage_location
            && self.check_any(&[TokenKind::Memory, TokenKind::Storage, TokenKind::Calldata])
        {
            self.advance().value
        } else {
            String::new()
        };
        let name = if self.is_identifier_like() {
            self.parse_identifier_like_name()?
        } else {
            String::new()
        };
        Ok(Node::VariableDeclaration(VariableDeclaration {
            meta: self.meta_from_start(&start),
            type_name: Box::new(type_name),
            name,
            storage_location,
            is_state_var,
            is_indexed: false,
            is_declared_const: false,
            is_immutable: false,
            is_transient: false,
            visibility: String::new(),
            override_specifier: None,
        }))
    }

    /// Bounded-lookahead disambiguation between a variable declaration and an expression
    /// statement, including the tuple-declaration form `(uint a, , bool b) = ...;` (spec.md §9
    /// "Speculative tuple-declaration parse"). Runs under a forced-tolerant probe so a failed
    /// attempt leaves no trace in `self.errors` and always rewinds the cursor.
    pub(crate) fn looks_like_variable_declaration(&mut self) -> bool {
        let probe = self.begin_probe();
        let looks_like_decl = self.try_parse_declaration_head();
        self.end_probe(probe);
        looks_like_decl
    }

    fn try_parse_declaration_head(&mut self) -> bool {
        if self.match_token(TokenKind::LParen) {
            loop {
                if self.check_any(&[TokenKind::Comma, TokenKind::RParen]) {
                    // empty tuple slot
                } else if !self.try_parse_declaration_slot() {
                    return false;
                }
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
            if !self.match_token(TokenKind::RParen) {
                return false;
            }
            return self.check(TokenKind::Assign);
        }
        self.try_parse_declaration_slot()
    }

    fn try_parse_declaration_slot(&mut self) -> bool {
        if self.parse_type_name().is_err() {
            return false;
        }
        if self.check_any(&[TokenKind::Memory, TokenKind::Storage, TokenKind::Calldata]) {
            self.advance();
        }
        if self.is_identifier_like() {
            self.advance();
            true
        } else {
            false
        }
    }
}
