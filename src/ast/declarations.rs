//! Declaration node variants: source unit, contracts, functions, and friends
//! (spec.md §4.2 "Top-level dispatch", "Contract body dispatch", "Function modifiers",
//! "State-variable, parameter, and struct-member parsing", "Layout directive").

use serde::{Deserialize, Serialize};

use super::location::NodeMeta;
use super::node::Node;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUnit {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub children: Vec<Node>,
}

/// `value` is the space-joined concatenation of the raw pragma tokens (spec.md §9 Open
/// Question — normalization, not byte-exact echoing, is the policy this crate keeps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PragmaDirective {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDirective {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_alias: Option<String>,
    /// `(originalName, alias)` pairs for `import {a as b, c} from "...";`.
    pub symbol_aliases: Vec<(String, Option<String>)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceSpecifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub base_name: Box<Node>,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    /// One of `"contract"`, `"abstract"`, `"interface"`, `"library"` (spec.md §3.3).
    pub kind: String,
    pub base_contracts: Vec<Node>,
    pub sub_nodes: Vec<Node>,
    /// `layout at <expr>` (0.8.24+, spec.md §4.2 "Layout directive"); resolved as a REDESIGN-FLAG
    /// addition beyond the reference implementation (spec.md §9 Open Question), see DESIGN.md.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub parameters: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_parameters: Option<Vec<Node>>,
    pub body: Option<Box<Node>>,
    pub visibility: String,
    pub modifiers: Vec<Node>,
    pub override_specifier: Option<Vec<Node>>,
    pub is_virtual: bool,
    pub state_mutability: String,
    pub is_constructor: bool,
    pub is_fallback: bool,
    pub is_receive_ether: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub parameters: Vec<Node>,
    pub body: Option<Box<Node>>,
    pub is_virtual: bool,
    pub override_specifier: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierInvocation {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    /// `None` for a bare invocation (`onlyOwner` with no parens at all); `Some(vec![])` for
    /// `onlyOwner()`.
    pub arguments: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateVariableDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub variables: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub type_name: Box<Node>,
    pub name: String,
    /// One of `""`, `"memory"`, `"storage"`, `"calldata"`, `"transient"` (spec.md §3.3).
    pub storage_location: String,
    pub is_state_var: bool,
    pub is_indexed: bool,
    pub is_declared_const: bool,
    pub is_immutable: bool,
    pub is_transient: bool,
    pub visibility: String,
    pub override_specifier: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub members: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub members: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub parameters: Vec<Node>,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub parameters: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedValueTypeDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    pub underlying_type: Box<Node>,
}

/// Both `using Lib for Type;` and `using {fn1 as op, fn2} for Type;` forms (spec.md §4.2 "using
/// directives"). `function_list` is empty for the library form; `library_name` is `None` for the
/// function-list form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsingForDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
    pub function_list: Vec<UsingFunctionEntry>,
    /// `None` for the `for *` wildcard form.
    pub type_name: Option<Box<Node>>,
    pub is_global: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsingFunctionEntry {
    pub function: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}
