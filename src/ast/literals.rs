//! Literal and identifier leaf nodes (spec.md §4.2 "Primary expressions").

use serde::{Deserialize, Serialize};

use super::location::NodeMeta;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLiteral {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_denomination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanLiteral {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub value: bool,
}

/// Adjacent string literals concatenate into a single node with one `parts` entry per source
/// literal (spec.md §8 law 7).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringLiteral {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub parts: Vec<String>,
    pub is_unicode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexLiteral {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub parts: Vec<String>,
}
