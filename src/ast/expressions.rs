//! Expression node variants (spec.md §4.2 "Expressions — precedence").

use serde::{Deserialize, Serialize};

use super::location::NodeMeta;
use super::node::Node;

/// Covers every assignment/binary form; the source lexeme is carried verbatim in `operator`
/// (spec.md §3.3 — assignment is `BinaryOperation`, not a distinct node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryOperation {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryOperation {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: String,
    pub sub_expression: Box<Node>,
    pub is_prefix: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditional {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Box<Node>,
    pub true_expression: Box<Node>,
    pub false_expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Box<Node>,
    pub arguments: Vec<Node>,
    /// Named-argument call syntax `f({a: 1, b: 2})`; empty when positional.
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallOptions {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Box<Node>,
    pub options: Vec<Node>,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAccess {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Box<Node>,
    pub member_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexAccess {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub base: Box<Node>,
    /// `None` for the bare-`[]` abstract-array-type position (e.g. `new uint[]`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRangeAccess {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub base: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_start: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_end: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub type_name: Box<Node>,
}

/// Both parenthesized tuples `(a, , b)` and array literals `[a, b]` (spec.md §4.2 "Primary
/// expressions" — array literals are `TupleExpression{is_array: true}`). Empty slots in a tuple
/// (`(a, , b)`) become `None` components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub components: Vec<Option<Node>>,
    pub is_array: bool,
}
