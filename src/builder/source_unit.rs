//! Top-level dispatch: one source file's sequence of pragmas, imports, contracts, and the
//! free-standing declarations 0.7+ permits outside a contract body (spec.md §4.2 "Top-level
//! dispatch").

use crate::ast::{Node, SourceUnit};
use crate::scanner::TokenKind;

use super::{Builder, PResult};

impl Builder {
    pub(crate) fn parse_source_unit(&mut self) -> PResult<Node> {
        let start = self.peek().clone();
        let mut children = Vec::new();
        while !self.is_at_end() {
            match self.parse_top_level_item() {
                Ok(node) => {
                    log::debug!("committed top-level {}", node.kind());
                    children.push(node);
                }
                Err(err) => {
                    if !self.options().tolerant {
                        return Err(err);
                    }
                    self.synchronize();
                }
            }
        }
        Ok(Node::SourceUnit(SourceUnit {
            meta: self.meta_from_start(&start),
            children,
        }))
    }

    fn parse_top_level_item(&mut self) -> PResult<Node> {
        match self.peek().kind {
            TokenKind::Pragma => self.parse_pragma_directive(),
            TokenKind::Import => self.parse_import_directive(),
            TokenKind::Contract | TokenKind::Abstract | TokenKind::Interface | TokenKind::Library => {
                self.parse_contract_definition()
            }
            TokenKind::Using => self.parse_using_for_declaration(),
            TokenKind::Struct => self.parse_struct_definition(),
            TokenKind::Enum => self.parse_enum_definition(),
            TokenKind::Event => self.parse_event_definition(),
            TokenKind::Error => self.parse_error_definition(),
            TokenKind::Function => self.parse_function_definition(),
            TokenKind::Type => self.parse_user_defined_value_type_definition(),
            _ => self.parse_state_variable_declaration(),
        }
    }
}
