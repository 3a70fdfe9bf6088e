//! Property-based invariants (spec.md §8 "Invariants and laws").

use proptest::prelude::*;
use solidity_syntax::ast::Node;
use solidity_syntax::{parse, ParserOptions};

fn meta_position_ok(node: &Node) -> bool {
    let meta = node.meta();
    if let Some(loc) = meta.loc {
        let ordered = (loc.end.line, loc.end.column) >= (loc.start.line, loc.start.column);
        if !ordered {
            return false;
        }
    }
    true
}

fn range_within_bounds(node: &Node, input_len: usize) -> bool {
    if let Some([start, end]) = node.meta().range {
        if end < start || end > input_len {
            return false;
        }
    }
    true
}

fn walk_all<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    out.push(node);
    for child in node.children() {
        walk_all(child, out);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Law 1: the root node's kind is always SourceUnit.
    #[test]
    fn root_is_always_source_unit(src in "[a-zA-Z0-9 {}();_.,\"]{0,120}") {
        let opts = ParserOptions { tolerant: true, ..Default::default() };
        let out = parse(&src, opts).expect("tolerant mode never returns Err");
        prop_assert_eq!(out.source_unit.kind(), "SourceUnit");
    }

    /// Laws 2 and 3: loc end >= start, and range bounds stay within the input.
    #[test]
    fn loc_and_range_invariants_hold(src in "[a-zA-Z0-9 {}();_.,\"]{0,120}") {
        let opts = ParserOptions { tolerant: true, loc: true, range: true };
        let out = parse(&src, opts).expect("tolerant mode never returns Err");
        let mut nodes = Vec::new();
        walk_all(&out.source_unit, &mut nodes);
        for node in nodes {
            prop_assert!(meta_position_ok(node));
            prop_assert!(range_within_bounds(node, src.len()));
        }
    }

    /// Law 4: parsing is deterministic.
    #[test]
    fn parsing_is_deterministic(src in "[a-zA-Z0-9 {}();_.,\"]{0,120}") {
        let opts = ParserOptions { tolerant: true, loc: true, range: true };
        let first = parse(&src, opts);
        let second = parse(&src, opts);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "one run errored while the other didn't"),
        }
    }

    /// Law 5: tolerant mode always returns a non-null SourceUnit and never panics.
    #[test]
    fn tolerant_mode_is_total(src in ".{0,200}") {
        let opts = ParserOptions { tolerant: true, ..Default::default() };
        let out = parse(&src, opts).expect("tolerant mode never returns Err");
        prop_assert!(matches!(out.source_unit, Node::SourceUnit(_)));
    }
}

/// Law 6: `*` binds tighter than `+`.
#[test]
fn multiplication_binds_tighter_than_addition() {
    let src = "contract C { function f() public { a + b * c; } }";
    let out = solidity_syntax::parse(src, ParserOptions::default()).unwrap();
    let Node::SourceUnit(u) = &out.source_unit else { panic!() };
    let Node::ContractDefinition(c) = &u.children[0] else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::BinaryOperation(plus) = stmt.expression.as_ref() else { panic!() };
    assert_eq!(plus.operator, "+");
    assert!(matches!(plus.left.as_ref(), Node::Identifier(_)));
    let Node::BinaryOperation(star) = plus.right.as_ref() else {
        panic!("expected a nested multiplication, got {:?}", plus.right.kind())
    };
    assert_eq!(star.operator, "*");
}

/// Law 6: `**` is right-associative.
#[test]
fn exponentiation_is_right_associative() {
    let src = "contract C { function f() public { a ** b ** c; } }";
    let out = solidity_syntax::parse(src, ParserOptions::default()).unwrap();
    let Node::SourceUnit(u) = &out.source_unit else { panic!() };
    let Node::ContractDefinition(c) = &u.children[0] else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::BinaryOperation(outer) = stmt.expression.as_ref() else { panic!() };
    assert_eq!(outer.operator, "**");
    assert!(matches!(outer.left.as_ref(), Node::Identifier(_)));
    let Node::BinaryOperation(inner) = outer.right.as_ref() else {
        panic!("expected right-associative nesting, got {:?}", outer.right.kind())
    };
    assert_eq!(inner.operator, "**");
}

/// Law 7: adjacent string literals concatenate into one StringLiteral with multiple parts.
#[test]
fn adjacent_string_literals_concatenate() {
    let src = r#"contract C { function f() public { "a" "b" "c"; } }"#;
    let out = solidity_syntax::parse(src, ParserOptions::default()).unwrap();
    let Node::SourceUnit(u) = &out.source_unit else { panic!() };
    let Node::ContractDefinition(c) = &u.children[0] else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::StringLiteral(lit) = stmt.expression.as_ref() else {
        panic!("expected a string literal, got {:?}", stmt.expression.kind())
    };
    assert_eq!(lit.parts, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

/// Boundary: empty input produces no errors and no children.
#[test]
fn empty_input_has_no_errors() {
    let out = solidity_syntax::parse("", ParserOptions::default()).unwrap();
    assert!(out.errors.is_empty());
    assert!(matches!(out.source_unit, Node::SourceUnit(_)));
}
