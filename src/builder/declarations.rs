//! Function/modifier/event/error/struct/enum declarations, pragma and import directives
//! (spec.md §4.2 "Function modifiers", "State-variable, parameter, and struct-member parsing").

use crate::ast::{
    EnumDefinition, EnumValue, ErrorDefinition, EventDefinition, FunctionDefinition,
    ImportDirective, ModifierDefinition, ModifierInvocation, Node, PragmaDirective,
    StateVariableDeclaration, StructDefinition, UserDefinedTypeName, UserDefinedValueTypeDefinition,
    VariableDeclaration,
};
use crate::scanner::TokenKind;

use super::{Builder, PResult};

impl Builder {
    pub(crate) fn parse_pragma_directive(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'pragma'
        let name = self.parse_identifier_like_name()?;
        let mut parts = Vec::new();
        while !self.check(TokenKind::Semicolon) && !self.is_at_end() {
            parts.push(self.advance().value);
        }
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::PragmaDirective(PragmaDirective {
            meta: self.meta_from_start(&start),
            name,
            value: parts.join(" "),
        }))
    }

    pub(crate) fn parse_import_directive(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'import'

        if self.check(TokenKind::String) {
            let path = self.advance().value;
            let unit_alias = if self.match_token(TokenKind::As) {
                Some(self.parse_identifier_like_name()?)
            } else {
                None
            };
            self.expect(TokenKind::Semicolon, ";")?;
            return Ok(Node::ImportDirective(ImportDirective {
                meta: self.meta_from_start(&start),
                path,
                unit_alias,
                symbol_aliases: Vec::new(),
            }));
        }

        if self.match_token(TokenKind::Star) {
            self.expect(TokenKind::As, "as")?;
            let alias = self.parse_identifier_like_name()?;
            self.expect(TokenKind::From, "from")?;
            let path = self.expect(TokenKind::String, "string literal")?.value;
            self.expect(TokenKind::Semicolon, ";")?;
            return Ok(Node::ImportDirective(ImportDirective {
                meta: self.meta_from_start(&start),
                path,
                unit_alias: Some(alias),
                symbol_aliases: Vec::new(),
            }));
        }

        self.expect(TokenKind::LBrace, "{")?;
        let mut symbol_aliases = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let original = self.parse_identifier_like_name()?;
                let alias = if self.match_token(TokenKind::As) {
                    Some(self.parse_identifier_like_name()?)
                } else {
                    None
                };
                symbol_aliases.push((original, alias));
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace, "}")?;
        self.expect(TokenKind::From, "from")?;
        let path = self.expect(TokenKind::String, "string literal")?.value;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::ImportDirective(ImportDirective {
            meta: self.meta_from_start(&start),
            path,
            unit_alias: None,
            symbol_aliases,
        }))
    }

    /// `function`/`constructor`/`fallback`/`receive` — shared by contract members and free
    /// (file-level) functions, which differ only in where the caller places the result.
    pub(crate) fn parse_function_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let is_constructor = self.check(TokenKind::Constructor);
        let is_fallback = self.check(TokenKind::Fallback);
        let is_receive = self.check(TokenKind::Receive);
        self.advance();

        let name = if is_constructor || is_fallback || is_receive {
            None
        } else if self.is_identifier_like() && !self.check(TokenKind::LParen) {
            Some(self.parse_identifier_like_name()?)
        } else {
            None
        };

        self.expect(TokenKind::LParen, "(")?;
        let mut parameters = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                parameters.push(self.parse_variable_declaration(true, false)?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, ")")?;

        let mut visibility = String::new();
        let mut state_mutability = String::new();
        let mut is_virtual = false;
        let mut override_specifier: Option<Vec<Node>> = None;
        let mut modifiers = Vec::new();

        loop {
            match self.peek().kind {
                TokenKind::Public | TokenKind::Private | TokenKind::Internal | TokenKind::External => {
                    visibility = self.advance().value;
                }
                TokenKind::Pure | TokenKind::View | TokenKind::Payable => {
                    state_mutability = self.advance().value;
                }
                TokenKind::Virtual => {
                    self.advance();
                    is_virtual = true;
                }
                TokenKind::Override => {
                    override_specifier = Some(self.parse_override_specifiers()?);
                }
                TokenKind::Returns | TokenKind::LBrace | TokenKind::Semicolon => break,
                _ if self.is_identifier_like() => {
                    modifiers.push(self.parse_modifier_invocation()?);
                }
                _ => break,
            }
        }

        let mut return_parameters: Option<Vec<Node>> = None;
        if self.match_token(TokenKind::Returns) {
            self.expect(TokenKind::LParen, "(")?;
            let mut rets = Vec::new();
            if !self.check(TokenKind::RParen) {
                loop {
                    rets.push(self.parse_variable_declaration(true, false)?);
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen, ")")?;
            return_parameters = Some(rets);
        }

        let body = if self.check(TokenKind::LBrace) {
            Some(Box::new(self.parse_block()?))
        } else {
            self.expect(TokenKind::Semicolon, ";")?;
            None
        };

        Ok(Node::FunctionDefinition(FunctionDefinition {
            meta: self.meta_from_start(&start),
            name,
            parameters,
            return_parameters,
            body,
            visibility,
            modifiers,
            override_specifier,
            is_virtual,
            state_mutability,
            is_constructor,
            is_fallback,
            is_receive_ether: is_receive,
        }))
    }

    pub(crate) fn parse_modifier_invocation(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let name = self.parse_dotted_identifier_path()?;
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
            Some(args)
        } else {
            None
        };
        Ok(Node::ModifierInvocation(ModifierInvocation {
            meta: self.meta_from_start(&start),
            name,
            arguments,
        }))
    }

    pub(crate) fn parse_modifier_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'modifier'
        let name = self.parse_identifier_like_name()?;

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

        let mut is_virtual = false;
        let mut override_specifier = None;
        loop {
            match self.peek().kind {
                TokenKind::Virtual => {
                    self.advance();
                    is_virtual = true;
                }
                TokenKind::Override => {
                    override_specifier = Some(self.parse_override_specifiers()?);
                }
                _ => break,
            }
        }

        let body = if self.check(TokenKind::LBrace) {
            Some(Box::new(self.parse_block()?))
        } else {
            self.expect(TokenKind::Semicolon, ";")?;
            None
        };

        Ok(Node::ModifierDefinition(ModifierDefinition {
            meta: self.meta_from_start(&start),
            name,
            parameters,
            body,
            is_virtual,
            override_specifier,
        }))
    }

    /// `override` / `override(Base1, Base2)`.
    fn parse_override_specifiers(&mut self) -> PResult<Vec<Node>> {
        self.advance(); // 'override'
        let mut specifiers = Vec::new();
        if self.match_token(TokenKind::LParen) {
            if !self.check(TokenKind::RParen) {
                loop {
                    let path_start = self.peek().clone();
                    let path = self.parse_dotted_identifier_path()?;
                    specifiers.push(Node::UserDefinedTypeName(UserDefinedTypeName {
                        meta: self.meta_from_start(&path_start),
                        name_path: path,
                    }));
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen, ")")?;
        }
        Ok(specifiers)
    }

    /// A state-variable declaration inside a contract body, or a file-level constant declaration
    /// (0.7.4+) — both close over the same closed `StateVariableDeclaration` node shape.
    pub(crate) fn parse_state_variable_declaration(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let type_name = self.parse_type_name()?;

        let mut visibility = String::new();
        let mut is_declared_const = false;
        let mut is_immutable = false;
        let mut is_transient = false;
        let mut override_specifier = None;
        loop {
            match self.peek().kind {
                TokenKind::Public | TokenKind::Private | TokenKind::Internal => {
                    visibility = self.advance().value;
                }
                TokenKind::Constant => {
                    self.advance();
                    is_declared_const = true;
                }
                TokenKind::Immutable => {
                    self.advance();
                    is_immutable = true;
                }
                TokenKind::Transient => {
                    self.advance();
                    is_transient = true;
                }
                TokenKind::Override => {
                    override_specifier = Some(self.parse_override_specifiers()?);
                }
                _ => break,
            }
        }

        let name = self.parse_identifier_like_name()?;
        let initial_value = if self.match_token(TokenKind::Assign) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, ";")?;

        let variable = Node::VariableDeclaration(VariableDeclaration {
            meta: self.meta_from_start(&start),
            type_name: Box::new(type_name),
            name,
            storage_location: String::new(),
            is_state_var: true,
            is_indexed: false,
            is_declared_const,
            is_immutable,
            is_transient,
            visibility,
            override_specifier,
        });

        Ok(Node::StateVariableDeclaration(StateVariableDeclaration {
            meta: self.meta_from_start(&start),
            variables: vec![variable],
            initial_value,
        }))
    }

    pub(crate) fn parse_struct_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'struct'
        let name = self.parse_identifier_like_name()?;
        self.expect(TokenKind::LBrace, "{")?;
        let mut members = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let member = self.parse_variable_declaration(false, false)?;
            self.expect(TokenKind::Semicolon, ";")?;
            members.push(member);
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Node::StructDefinition(StructDefinition {
            meta: self.meta_from_start(&start),
            name,
            members,
        }))
    }

    pub(crate) fn parse_enum_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'enum'
        let name = self.parse_identifier_like_name()?;
        self.expect(TokenKind::LBrace, "{")?;
        let mut members = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let member_start = self.peek().clone();
                let member_name = self.parse_identifier_like_name()?;
                members.push(Node::EnumValue(EnumValue {
                    meta: self.meta_from_start(&member_start),
                    name: member_name,
                }));
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Node::EnumDefinition(EnumDefinition {
            meta: self.meta_from_start(&start),
            name,
            members,
        }))
    }

    pub(crate) fn parse_event_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'event'
        let name = self.parse_identifier_like_name()?;
        self.expect(TokenKind::LParen, "(")?;
        let mut parameters = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let param_start = self.peek().clone();
                let type_name = self.parse_type_name()?;
                let is_indexed = self.match_token(TokenKind::Indexed);
                let name = if self.is_identifier_like() {
                    self.parse_identifier_like_name()?
                } else {
                    String::new()
                };
                parameters.push(Node::VariableDeclaration(VariableDeclaration {
                    meta: self.meta_from_start(&param_start),
                    type_name: Box::new(type_name),
                    name,
                    storage_location: String::new(),
                    is_state_var: false,
                    is_indexed,
                    is_declared_const: false,
                    is_immutable: false,
                    is_transient: false,
                    visibility: String::new(),
                    override_specifier: None,
                }));
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, ")")?;
        let is_anonymous = self.match_token(TokenKind::Anonymous);
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::EventDefinition(EventDefinition {
            meta: self.meta_from_start(&start),
            name,
            parameters,
            is_anonymous,
        }))
    }

    pub(crate) fn parse_error_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'error'
        let name = self.parse_identifier_like_name()?;
        self.expect(TokenKind::LParen, "(")?;
        let mut parameters = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let param_start = self.peek().clone();
                let type_name = self.parse_type_name()?;
                let name = if self.is_identifier_like() {
                    self.parse_identifier_like_name()?
                } else {
                    String::new()
                };
                parameters.push(Node::VariableDeclaration(VariableDeclaration {
                    meta: self.meta_from_start(&param_start),
                    type_name: Box::new(type_name),
                    name,
                    storage_location: String::new(),
                    is_state_var: false,
                    is_indexed: false,
                    is_declared_const: false,
                    is_immutable: false,
                    is_transient: false,
                    visibility: String::new(),
                    override_specifier: None,
                }));
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, ")")?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::ErrorDefinition(ErrorDefinition {
            meta: self.meta_from_start(&start),
            name,
            parameters,
        }))
    }

    pub(crate) fn parse_user_defined_value_type_definition(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        self.advance(); // 'type'
        let name = self.parse_identifier_like_name()?;
        self.expect(TokenKind::Is, "is")?;
        let underlying_type = self.parse_type_name()?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Node::UserDefinedValueTypeDefinition(UserDefinedValueTypeDefinition {
            meta: self.meta_from_start(&start),
            name,
            underlying_type: Box::new(underlying_type),
        }))
    }
}
