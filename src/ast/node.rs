//! The closed set of AST node kinds (spec.md §6.2) as a single tagged enum.
//!
//! A reimplementation gets exhaustive match-checking "for free" from a tagged variant over a
//! closed sum type (spec.md §9 "Polymorphic tree"), which is why this crate represents every
//! node kind as one `Node` enum instead of the type-erased `dyn` abstraction a dynamically typed
//! reference implementation would use.

use serde::{Deserialize, Serialize};

use super::assembly::*;
use super::declarations::*;
use super::expressions::*;
use super::literals::*;
use super::location::NodeMeta;
use super::statements::*;
use super::types::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    SourceUnit(SourceUnit),
    PragmaDirective(PragmaDirective),
    ImportDirective(ImportDirective),
    ContractDefinition(ContractDefinition),
    InheritanceSpecifier(InheritanceSpecifier),
    FunctionDefinition(FunctionDefinition),
    ModifierDefinition(ModifierDefinition),
    ModifierInvocation(ModifierInvocation),
    StateVariableDeclaration(StateVariableDeclaration),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarationStatement(VariableDeclarationStatement),
    StructDefinition(StructDefinition),
    EnumDefinition(EnumDefinition),
    EnumValue(EnumValue),
    EventDefinition(EventDefinition),
    ErrorDefinition(ErrorDefinition),
    UserDefinedValueTypeDefinition(UserDefinedValueTypeDefinition),
    UsingForDeclaration(UsingForDeclaration),
    ElementaryTypeName(ElementaryTypeName),
    UserDefinedTypeName(UserDefinedTypeName),
    Mapping(Mapping),
    ArrayTypeName(ArrayTypeName),
    FunctionTypeName(FunctionTypeName),
    Block(Block),
    UncheckedBlock(UncheckedBlock),
    ExpressionStatement(ExpressionStatement),
    IfStatement(IfStatement),
    WhileStatement(WhileStatement),
    DoWhileStatement(DoWhileStatement),
    ForStatement(ForStatement),
    ContinueStatement(ContinueStatement),
    BreakStatement(BreakStatement),
    ReturnStatement(ReturnStatement),
    EmitStatement(EmitStatement),
    RevertStatement(RevertStatement),
    TryStatement(TryStatement),
    CatchClause(CatchClause),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    Conditional(Conditional),
    FunctionCall(FunctionCall),
    FunctionCallOptions(FunctionCallOptions),
    MemberAccess(MemberAccess),
    IndexAccess(IndexAccess),
    IndexRangeAccess(IndexRangeAccess),
    NewExpression(NewExpression),
    TupleExpression(TupleExpression),
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    HexLiteral(HexLiteral),
    InlineAssembly(InlineAssembly),
    AssemblyBlock(AssemblyBlock),
    AssemblyCall(AssemblyCall),
    AssemblyLocalDefinition(AssemblyLocalDefinition),
    AssemblyAssignment(AssemblyAssignment),
    AssemblyIdentifier(AssemblyIdentifier),
    AssemblyLiteral(AssemblyLiteral),
    AssemblyIf(AssemblyIf),
    AssemblySwitch(AssemblySwitch),
    AssemblyCase(AssemblyCase),
    AssemblyFor(AssemblyFor),
    AssemblyFunctionDefinition(AssemblyFunctionDefinition),
}

impl Node {
    /// The stable `kind` string for this node (spec.md §6.2).
    pub fn kind(&self) -> &'static str {
        match self {
            Node::SourceUnit(_) => "SourceUnit",
            Node::PragmaDirective(_) => "PragmaDirective",
            Node::ImportDirective(_) => "ImportDirective",
            Node::ContractDefinition(_) => "ContractDefinition",
            Node::InheritanceSpecifier(_) => "InheritanceSpecifier",
            Node::FunctionDefinition(_) => "FunctionDefinition",
            Node::ModifierDefinition(_) => "ModifierDefinition",
            Node::ModifierInvocation(_) => "ModifierInvocation",
            Node::StateVariableDeclaration(_) => "StateVariableDeclaration",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::VariableDeclarationStatement(_) => "VariableDeclarationStatement",
            Node::StructDefinition(_) => "StructDefinition",
            Node::EnumDefinition(_) => "EnumDefinition",
            Node::EnumValue(_) => "EnumValue",
            Node::EventDefinition(_) => "EventDefinition",
            Node::ErrorDefinition(_) => "ErrorDefinition",
            Node::UserDefinedValueTypeDefinition(_) => "UserDefinedValueTypeDefinition",
            Node::UsingForDeclaration(_) => "UsingForDeclaration",
            Node::ElementaryTypeName(_) => "ElementaryTypeName",
            Node::UserDefinedTypeName(_) => "UserDefinedTypeName",
            Node::Mapping(_) => "Mapping",
            Node::ArrayTypeName(_) => "ArrayTypeName",
            Node::FunctionTypeName(_) => "FunctionTypeName",
            Node::Block(_) => "Block",
            Node::UncheckedBlock(_) => "UncheckedBlock",
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::IfStatement(_) => "IfStatement",
            Node::WhileStatement(_) => "WhileStatement",
            Node::DoWhileStatement(_) => "DoWhileStatement",
            Node::ForStatement(_) => "ForStatement",
            Node::ContinueStatement(_) => "ContinueStatement",
            Node::BreakStatement(_) => "BreakStatement",
            Node::ReturnStatement(_) => "ReturnStatement",
            Node::EmitStatement(_) => "EmitStatement",
            Node::RevertStatement(_) => "RevertStatement",
            Node::TryStatement(_) => "TryStatement",
            Node::CatchClause(_) => "CatchClause",
            Node::BinaryOperation(_) => "BinaryOperation",
            Node::UnaryOperation(_) => "UnaryOperation",
            Node::Conditional(_) => "Conditional",
            Node::FunctionCall(_) => "FunctionCall",
            Node::FunctionCallOptions(_) => "FunctionCallOptions",
            Node::MemberAccess(_) => "MemberAccess",
            Node::IndexAccess(_) => "IndexAccess",
            Node::IndexRangeAccess(_) => "IndexRangeAccess",
            Node::NewExpression(_) => "NewExpression",
            Node::TupleExpression(_) => "TupleExpression",
            Node::Identifier(_) => "Identifier",
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::BooleanLiteral(_) => "BooleanLiteral",
            Node::StringLiteral(_) => "StringLiteral",
            Node::HexLiteral(_) => "HexLiteral",
            Node::InlineAssembly(_) => "InlineAssembly",
            Node::AssemblyBlock(_) => "AssemblyBlock",
            Node::AssemblyCall(_) => "AssemblyCall",
            Node::AssemblyLocalDefinition(_) => "AssemblyLocalDefinition",
            Node::AssemblyAssignment(_) => "AssemblyAssignment",
            Node::AssemblyIdentifier(_) => "AssemblyIdentifier",
            Node::AssemblyLiteral(_) => "AssemblyLiteral",
            Node::AssemblyIf(_) => "AssemblyIf",
            Node::AssemblySwitch(_) => "AssemblySwitch",
            Node::AssemblyCase(_) => "AssemblyCase",
            Node::AssemblyFor(_) => "AssemblyFor",
            Node::AssemblyFunctionDefinition(_) => "AssemblyFunctionDefinition",
        }
    }

    /// The shared `loc`/`range` header carried by every variant.
    pub fn meta(&self) -> &NodeMeta {
        macro_rules! m {
            ($($v:ident),* $(,)?) => {
                match self {
                    $(Node::$v(inner) => &inner.meta,)*
                }
            };
        }
        m!(
            SourceUnit,
            PragmaDirective,
            ImportDirective,
            ContractDefinition,
            InheritanceSpecifier,
            FunctionDefinition,
            ModifierDefinition,
            ModifierInvocation,
            StateVariableDeclaration,
            VariableDeclaration,
            VariableDeclarationStatement,
            StructDefinition,
            EnumDefinition,
            EnumValue,
            EventDefinition,
            ErrorDefinition,
            UserDefinedValueTypeDefinition,
            UsingForDeclaration,
            ElementaryTypeName,
            UserDefinedTypeName,
            Mapping,
            ArrayTypeName,
            FunctionTypeName,
            Block,
            UncheckedBlock,
            ExpressionStatement,
            IfStatement,
            WhileStatement,
            DoWhileStatement,
            ForStatement,
            ContinueStatement,
            BreakStatement,
            ReturnStatement,
            EmitStatement,
            RevertStatement,
            TryStatement,
            CatchClause,
            BinaryOperation,
            UnaryOperation,
            Conditional,
            FunctionCall,
            FunctionCallOptions,
            MemberAccess,
            IndexAccess,
            IndexRangeAccess,
            NewExpression,
            TupleExpression,
            Identifier,
            NumberLiteral,
            BooleanLiteral,
            StringLiteral,
            HexLiteral,
            InlineAssembly,
            AssemblyBlock,
            AssemblyCall,
            AssemblyLocalDefinition,
            AssemblyAssignment,
            AssemblyIdentifier,
            AssemblyLiteral,
            AssemblyIf,
            AssemblySwitch,
            AssemblyCase,
            AssemblyFor,
            AssemblyFunctionDefinition,
        )
    }

    /// Pre-order children of this node, for the generic walker (spec.md §9 "Tree walking").
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::SourceUnit(n) => n.children.iter().collect(),
            Node::ContractDefinition(n) => n
                .base_contracts
                .iter()
                .chain(n.sub_nodes.iter())
                .chain(n.layout.as_deref())
                .collect(),
            Node::InheritanceSpecifier(n) => {
                std::iter::once(n.base_name.as_ref()).chain(n.arguments.iter()).collect()
            }
            Node::FunctionDefinition(n) => n
                .parameters
                .iter()
                .chain(n.return_parameters.iter().flatten())
                .chain(n.modifiers.iter())
                .chain(n.override_specifier.iter().flatten())
                .chain(n.body.as_deref())
                .collect(),
            Node::ModifierDefinition(n) => n
                .parameters
                .iter()
                .chain(n.override_specifier.iter().flatten())
                .chain(n.body.as_deref())
                .collect(),
            Node::ModifierInvocation(n) => n.arguments.iter().flatten().collect(),
            Node::StateVariableDeclaration(n) => {
                n.variables.iter().chain(n.initial_value.as_deref()).collect()
            }
            Node::VariableDeclaration(n) => std::iter::once(n.type_name.as_ref())
                .chain(n.override_specifier.iter().flatten())
                .collect(),
            Node::VariableDeclarationStatement(n) => n
                .variables
                .iter()
                .filter_map(Option::as_ref)
                .chain(n.initial_value.as_deref())
                .collect(),
            Node::StructDefinition(n) => n.members.iter().collect(),
            Node::EnumDefinition(n) => n.members.iter().collect(),
            Node::EventDefinition(n) => n.parameters.iter().collect(),
            Node::ErrorDefinition(n) => n.parameters.iter().collect(),
            Node::UserDefinedValueTypeDefinition(n) => vec![n.underlying_type.as_ref()],
            Node::UsingForDeclaration(n) => n.type_name.as_deref().into_iter().collect(),
            Node::Mapping(n) => std::iter::once(n.key_type.as_ref())
                .chain(n.key_name.as_deref())
                .chain(std::iter::once(n.value_type.as_ref()))
                .chain(n.value_name.as_deref())
                .collect(),
            Node::ArrayTypeName(n) => {
                std::iter::once(n.base_type_name.as_ref()).chain(n.length.as_deref()).collect()
            }
            Node::FunctionTypeName(n) => {
                n.parameter_types.iter().chain(n.return_types.iter()).collect()
            }
            Node::Block(n) => n.statements.iter().collect(),
            Node::UncheckedBlock(n) => n.statements.iter().collect(),
            Node::ExpressionStatement(n) => vec![n.expression.as_ref()],
            Node::IfStatement(n) => std::iter::once(n.condition.as_ref())
                .chain(std::iter::once(n.true_body.as_ref()))
                .chain(n.false_body.as_deref())
                .collect(),
            Node::WhileStatement(n) => vec![n.condition.as_ref(), n.body.as_ref()],
            Node::DoWhileStatement(n) => vec![n.condition.as_ref(), n.body.as_ref()],
            Node::ForStatement(n) => n
                .init_expression
                .as_deref()
                .into_iter()
                .chain(n.condition_expression.as_deref())
                .chain(n.loop_expression.as_deref())
                .chain(std::iter::once(n.body.as_ref()))
                .collect(),
            Node::ReturnStatement(n) => n.expression.as_deref().into_iter().collect(),
            Node::EmitStatement(n) => vec![n.event_call.as_ref()],
            Node::RevertStatement(n) => vec![n.revert_call.as_ref()],
            Node::TryStatement(n) => std::iter::once(n.expression.as_ref())
                .chain(n.return_parameters.iter())
                .chain(std::iter::once(n.body.as_ref()))
                .chain(n.catch_clauses.iter())
                .collect(),
            Node::CatchClause(n) => n.parameters.iter().chain(std::iter::once(n.body.as_ref())).collect(),
            Node::BinaryOperation(n) => vec![n.left.as_ref(), n.right.as_ref()],
            Node::UnaryOperation(n) => vec![n.sub_expression.as_ref()],
            Node::Conditional(n) => {
                vec![n.condition.as_ref(), n.true_expression.as_ref(), n.false_expression.as_ref()]
            }
            Node::FunctionCall(n) => {
                std::iter::once(n.expression.as_ref()).chain(n.arguments.iter()).collect()
            }
            Node::FunctionCallOptions(n) => {
                std::iter::once(n.expression.as_ref()).chain(n.options.iter()).collect()
            }
            Node::MemberAccess(n) => vec![n.expression.as_ref()],
            Node::IndexAccess(n) => {
                std::iter::once(n.base.as_ref()).chain(n.index.as_deref()).collect()
            }
            Node::IndexRangeAccess(n) => std::iter::once(n.base.as_ref())
                .chain(n.index_start.as_deref())
                .chain(n.index_end.as_deref())
                .collect(),
            Node::NewExpression(n) => vec![n.type_name.as_ref()],
            Node::TupleExpression(n) => n.components.iter().filter_map(Option::as_ref).collect(),
            Node::InlineAssembly(n) => vec![n.body.as_ref()],
            Node::AssemblyBlock(n) => n.operations.iter().collect(),
            Node::AssemblyCall(n) => n.arguments.iter().collect(),
            Node::AssemblyLocalDefinition(n) => {
                n.names.iter().chain(n.expression.as_deref()).collect()
            }
            Node::AssemblyAssignment(n) => {
                n.names.iter().chain(std::iter::once(n.expression.as_ref())).collect()
            }
            Node::AssemblyIf(n) => vec![n.condition.as_ref(), n.body.as_ref()],
            Node::AssemblySwitch(n) => {
                std::iter::once(n.expression.as_ref()).chain(n.cases.iter()).collect()
            }
            Node::AssemblyCase(n) => {
                n.value.as_deref().into_iter().chain(std::iter::once(n.body.as_ref())).collect()
            }
            Node::AssemblyFor(n) => {
                vec![n.pre.as_ref(), n.condition.as_ref(), n.post.as_ref(), n.body.as_ref()]
            }
            Node::AssemblyFunctionDefinition(n) => n
                .arguments
                .iter()
                .chain(n.return_arguments.iter())
                .chain(std::iter::once(n.body.as_ref()))
                .collect(),
            // Leaves: no children.
            Node::PragmaDirective(_)
            | Node::ImportDirective(_)
            | Node::EnumValue(_)
            | Node::ElementaryTypeName(_)
            | Node::UserDefinedTypeName(_)
            | Node::ContinueStatement(_)
            | Node::BreakStatement(_)
            | Node::Identifier(_)
            | Node::NumberLiteral(_)
            | Node::BooleanLiteral(_)
            | Node::StringLiteral(_)
            | Node::HexLiteral(_)
            | Node::AssemblyIdentifier(_)
            | Node::AssemblyLiteral(_) => vec![],
        }
    }
}
