//! Type-name node variants (spec.md §4.2 "Mapping types", §6.2).

use serde::{Deserialize, Serialize};

use super::location::NodeMeta;
use super::node::Node;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementaryTypeName {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    /// Set only on `address` used with a trailing `payable` mutability (spec.md §4.2 "Primary
    /// expressions" — `payable(e)` call-callee encoding).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedTypeName {
    #[serde(flatten)]
    pub meta: NodeMeta,
    /// Dotted identifier path, e.g. `"Lib.Type"`.
    pub name_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub key_type: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<Box<Node>>,
    pub value_type: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_name: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTypeName {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub base_type_name: Box<Node>,
    /// `None` for a dynamic array (`T[]`); `Some(expr)` for a fixed-size array (`T[N]`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeName {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub parameter_types: Vec<Node>,
    pub return_types: Vec<Node>,
    pub visibility: String,
    pub state_mutability: String,
}
