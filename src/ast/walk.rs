//! The single generic tree walker (spec.md §9 "Tree walking", SPEC_FULL.md AMBIENT.4).
//!
//! A full visitor dispatcher is out of scope (spec.md §1); this is the minimal primitive a
//! downstream linter/formatter needs to build one.

use super::node::Node;

/// Pre-order traversal: visits `node`, then recurses into each child left to right.
pub fn walk<'a>(node: &'a Node, visitor: &mut impl FnMut(&'a Node)) {
    visitor(node);
    for child in node.children() {
        walk(child, visitor);
    }
}
