//! End-to-end scenarios snapshotted against literal source fixtures (spec.md §8 "End-to-end
//! scenarios").

use solidity_syntax::{parse, ParserOptions};

fn tree(src: &str) -> solidity_syntax::ast::Node {
    parse(src, ParserOptions::default())
        .unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
        .source_unit
}

#[test]
fn pragma_directive() {
    insta::assert_yaml_snapshot!(tree("pragma solidity ^0.8.0;"));
}

#[test]
fn contract_with_state_variable() {
    insta::assert_yaml_snapshot!(tree("contract C { uint256 x; }"));
}

#[test]
fn function_with_visibility_mutability_and_body() {
    insta::assert_yaml_snapshot!(tree(
        "contract C { function f(uint a) public view returns (uint) { return a + 1; } }"
    ));
}

#[test]
fn interface_function_with_no_body() {
    insta::assert_yaml_snapshot!(tree("interface I { function f() external; }"));
}

#[test]
fn mapping_with_named_key_and_value() {
    insta::assert_yaml_snapshot!(tree(
        "contract C { mapping(address account => uint256 balance) m; }"
    ));
}

#[test]
fn inline_assembly_let_with_call() {
    insta::assert_yaml_snapshot!(tree(
        "contract C { function f() public { assembly { let x := add(1, 2) } } }"
    ));
}

#[test]
fn tolerant_mode_garbage_contract_body() {
    let opts = ParserOptions { tolerant: true, ..Default::default() };
    let out = parse("contract C { invalid syntax here }", opts).expect("tolerant mode never errors");
    assert!(!out.errors.is_empty());
    insta::assert_yaml_snapshot!(out.source_unit);
}

#[test]
fn empty_input() {
    insta::assert_yaml_snapshot!(tree(""));
}

#[test]
fn unterminated_string_in_tolerant_mode() {
    let opts = ParserOptions { tolerant: true, ..Default::default() };
    let out = parse("contract C { string s = \"abc\n }", opts).expect("tolerant mode never errors");
    insta::assert_yaml_snapshot!(out.source_unit);
}
