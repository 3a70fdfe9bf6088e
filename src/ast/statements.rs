//! Statement node variants (spec.md §4.2 "Statements", "Try statement").

use serde::{Deserialize, Serialize};

use super::location::NodeMeta;
use super::node::Node;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub statements: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncheckedBlock {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub statements: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Box<Node>,
    pub true_body: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub false_body: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhileStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoWhileStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_expression: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_expression: Option<Box<Node>>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub event_call: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub revert_call: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Box<Node>,
    pub return_parameters: Vec<Node>,
    pub body: Box<Node>,
    pub catch_clauses: Vec<Node>,
}

/// `kind` holds the catch identifier lexeme (`"Error"`, `"Panic"`, or empty for the fallback
/// catch); return parameters belong to the enclosing `TryStatement`, not here (spec.md §4.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchClause {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub kind: String,
    pub parameters: Vec<Node>,
    pub body: Box<Node>,
    pub is_reason_string_type: bool,
}

/// `variables` holds one slot per declared name; a `None` slot is an empty tuple-destructuring
/// position (`(uint a, , bool b) = ...;`, spec.md §4.2 "Statements").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclarationStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub variables: Vec<Option<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Box<Node>>,
}
