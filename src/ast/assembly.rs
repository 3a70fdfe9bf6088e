//! Inline-assembly node variants (spec.md §4.2 "Inline assembly").

use serde::{Deserialize, Serialize};

use super::location::NodeMeta;
use super::node::Node;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineAssembly {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyBlock {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operations: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyCall {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub function_name: String,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyLocalDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub names: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyAssignment {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub names: Vec<Node>,
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyIdentifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
}

/// `kind` is one of `"number"`, `"string"`, `"boolean"` (spec.md §4.2 "Inline assembly").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyLiteral {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyIf {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblySwitch {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Box<Node>,
    pub cases: Vec<Node>,
}

/// `is_default` distinguishes `default { ... }` from `case <literal> { ... }`; `value` is `None`
/// for the default arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyCase {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<Node>>,
    pub body: Box<Node>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyFor {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub pre: Box<Node>,
    pub condition: Box<Node>,
    pub post: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyFunctionDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub arguments: Vec<Node>,
    pub return_arguments: Vec<Node>,
    pub body: Box<Node>,
}
