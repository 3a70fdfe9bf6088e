//! Builder unit tests, organized by grammar area (spec.md §4.2).

use rstest::rstest;
use solidity_syntax::ast::Node;
use solidity_syntax::{parse, BuildError, ParserOptions};

fn strict(src: &str) -> Node {
    parse(src, ParserOptions::default()).unwrap_or_else(|e| panic!("{src:?} failed: {e}")).source_unit
}

fn strict_err(src: &str) -> BuildError {
    parse(src, ParserOptions::default()).expect_err("expected a strict-mode error")
}

fn tolerant(src: &str) -> (Node, usize) {
    let opts = ParserOptions { tolerant: true, ..Default::default() };
    let out = parse(src, opts).expect("tolerant mode never returns Err");
    (out.source_unit, out.errors.len())
}

fn only_child(unit: &Node) -> &Node {
    match unit {
        Node::SourceUnit(u) => {
            assert_eq!(u.children.len(), 1, "expected exactly one top-level node");
            &u.children[0]
        }
        other => panic!("expected SourceUnit, got {:?}", other.kind()),
    }
}

// ---- pragma / import ----

#[test]
fn pragma_directive() {
    let unit = strict("pragma solidity ^0.8.0;");
    match only_child(&unit) {
        Node::PragmaDirective(p) => {
            assert_eq!(p.name, "solidity");
            assert_eq!(p.value, "^ 0.8 . 0");
        }
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

#[rstest]
#[case(r#"import "lib.sol";"#)]
#[case(r#"import "lib.sol" as L;"#)]
#[case(r#"import * as L from "lib.sol";"#)]
#[case(r#"import {A as B, C} from "lib.sol";"#)]
fn import_directive_forms(#[case] src: &str) {
    let unit = strict(src);
    assert!(matches!(only_child(&unit), Node::ImportDirective(_)));
}

#[test]
fn import_symbol_aliases_are_captured() {
    let unit = strict(r#"import {A as B, C} from "lib.sol";"#);
    match only_child(&unit) {
        Node::ImportDirective(i) => {
            assert_eq!(i.path, "lib.sol");
            assert_eq!(
                i.symbol_aliases,
                vec![("A".to_string(), Some("B".to_string())), ("C".to_string(), None)]
            );
        }
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

// ---- contracts, state variables, mappings ----

#[test]
fn simple_contract_with_state_variable() {
    let unit = strict("contract C { uint256 x; }");
    match only_child(&unit) {
        Node::ContractDefinition(c) => {
            assert_eq!(c.name, "C");
            assert_eq!(c.kind, "contract");
            assert_eq!(c.sub_nodes.len(), 1);
            match &c.sub_nodes[0] {
                Node::StateVariableDeclaration(decl) => match &decl.variables[0] {
                    Node::VariableDeclaration(v) => {
                        assert_eq!(v.name, "x");
                        match v.type_name.as_ref() {
                            Node::ElementaryTypeName(t) => assert_eq!(t.name, "uint256"),
                            other => panic!("unexpected type {:?}", other.kind()),
                        }
                    }
                    other => panic!("unexpected node {:?}", other.kind()),
                },
                other => panic!("unexpected node {:?}", other.kind()),
            }
        }
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

#[rstest]
#[case("contract C {}", "contract")]
#[case("abstract contract C {}", "abstract")]
#[case("interface I {}", "interface")]
#[case("library L {}", "library")]
fn contract_kind_keywords(#[case] src: &str, #[case] expected_kind: &str) {
    let unit = strict(src);
    match only_child(&unit) {
        Node::ContractDefinition(c) => assert_eq!(c.kind, expected_kind),
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

#[test]
fn contract_inheritance_list() {
    let unit = strict("contract C is A, B(1) {}");
    match only_child(&unit) {
        Node::ContractDefinition(c) => assert_eq!(c.base_contracts.len(), 2),
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

#[test]
fn mapping_with_named_key_and_value() {
    let unit = strict("contract C { mapping(address account => uint256 balance) public m; }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!("expected contract") };
    let Node::StateVariableDeclaration(decl) = &c.sub_nodes[0] else { panic!("expected state var") };
    let Node::VariableDeclaration(v) = &decl.variables[0] else { panic!("expected declaration") };
    assert_eq!(v.visibility, "public");
    match v.type_name.as_ref() {
        Node::Mapping(m) => {
            let Node::Identifier(key) = m.key_name.as_deref().unwrap() else { panic!() };
            assert_eq!(key.name, "account");
            let Node::Identifier(value) = m.value_name.as_deref().unwrap() else { panic!() };
            assert_eq!(value.name, "balance");
        }
        other => panic!("unexpected type {:?}", other.kind()),
    }
}

#[test]
fn layout_at_directive_is_attached_to_contract() {
    let unit = strict("contract C layout at 0x1234 { }");
    match only_child(&unit) {
        Node::ContractDefinition(c) => assert!(c.layout.is_some()),
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

// ---- functions ----

#[test]
fn function_with_visibility_mutability_return_and_body() {
    let unit = strict("contract C { function f(uint a) public view returns (uint) { return a + 1; } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!("expected contract") };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!("expected function") };
    assert_eq!(f.name.as_deref(), Some("f"));
    assert_eq!(f.visibility, "public");
    assert_eq!(f.state_mutability, "view");
    assert_eq!(f.parameters.len(), 1);
    assert_eq!(f.return_parameters.as_ref().unwrap().len(), 1);
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!("expected block body") };
    assert_eq!(body.statements.len(), 1);
    let Node::ReturnStatement(ret) = &body.statements[0] else { panic!("expected return") };
    let Node::BinaryOperation(op) = ret.expression.as_deref().unwrap() else { panic!("expected +") };
    assert_eq!(op.operator, "+");
}

#[test]
fn interface_function_has_no_body() {
    let unit = strict("interface I { function f() external; }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!("expected contract") };
    assert_eq!(c.kind, "interface");
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!("expected function") };
    assert!(f.body.is_none());
    assert_eq!(f.visibility, "external");
}

#[test]
fn free_function_and_contract_function_share_the_same_node_shape() {
    let unit = strict("function helper() pure returns (uint) { return 1; } contract C {}");
    let Node::SourceUnit(u) = &unit else { panic!() };
    assert!(matches!(u.children[0], Node::FunctionDefinition(_)));
    assert!(matches!(u.children[1], Node::ContractDefinition(_)));
}

#[test]
fn top_level_event_declaration() {
    let unit = strict("event Foo(uint x);");
    match only_child(&unit) {
        Node::EventDefinition(e) => {
            assert_eq!(e.name, "Foo");
            assert_eq!(e.parameters.len(), 1);
            assert!(!e.is_anonymous);
        }
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

#[test]
fn constructor_fallback_and_receive() {
    let unit = strict(
        "contract C { constructor() {} fallback() external {} receive() external payable {} }",
    );
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(ctor) = &c.sub_nodes[0] else { panic!() };
    assert!(ctor.is_constructor);
    let Node::FunctionDefinition(fallback) = &c.sub_nodes[1] else { panic!() };
    assert!(fallback.is_fallback);
    let Node::FunctionDefinition(receive) = &c.sub_nodes[2] else { panic!() };
    assert!(receive.is_receive_ether);
}

// ---- expressions ----

#[test]
fn payable_cast_encodes_as_call_with_address_payable_callee() {
    let unit = strict("contract C { function f() public { payable(msg.sender); } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::FunctionCall(call) = stmt.expression.as_ref() else { panic!() };
    match call.expression.as_ref() {
        Node::ElementaryTypeName(t) => {
            assert_eq!(t.name, "address");
            assert_eq!(t.state_mutability.as_deref(), Some("payable"));
        }
        other => panic!("unexpected callee {:?}", other.kind()),
    }
}

#[test]
fn type_expression_encodes_as_call_to_identifier_type() {
    let unit = strict("contract C { function f() public { type(uint256); } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::FunctionCall(call) = stmt.expression.as_ref() else { panic!() };
    let Node::Identifier(callee) = call.expression.as_ref() else { panic!() };
    assert_eq!(callee.name, "type");
    assert!(matches!(call.arguments[0], Node::ElementaryTypeName(_)));
}

#[rstest]
#[case("()", 0)]
#[case("(a,)", 2)]
#[case("(a, , b)", 3)]
#[case("(, a)", 2)]
fn tuple_expression_slot_counts(#[case] src: &str, #[case] expected_slots: usize) {
    let wrapped = format!("contract C {{ function f() public {{ {src}; }} }}");
    let unit = strict(&wrapped);
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::TupleExpression(tuple) = stmt.expression.as_ref() else {
        panic!("expected tuple, got {:?}", stmt.expression.kind())
    };
    assert_eq!(tuple.components.len(), expected_slots);
}

#[test]
fn bare_parenthesized_expression_is_unwrapped_not_a_tuple() {
    let wrapped = "contract C { function f() public { (1 + 2); } }";
    let unit = strict(wrapped);
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    assert!(matches!(stmt.expression.as_ref(), Node::BinaryOperation(_)));
}

#[test]
fn named_argument_call() {
    let unit = strict("contract C { function f() public { g({a: 1, b: 2}); } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::FunctionCall(call) = stmt.expression.as_ref() else { panic!() };
    assert_eq!(call.names, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(call.arguments.len(), 2);
}

#[test]
fn call_options_are_parsed_after_call() {
    let unit = strict("contract C { function f() public { g{value: 1}(); } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::ExpressionStatement(stmt) = &body.statements[0] else { panic!() };
    let Node::FunctionCall(call) = stmt.expression.as_ref() else { panic!() };
    let Node::FunctionCallOptions(opts) = call.expression.as_ref() else {
        panic!("expected call-options callee, got {:?}", call.expression.kind())
    };
    assert_eq!(opts.names, vec!["value".to_string()]);
}

// ---- statements ----

#[test]
fn tuple_variable_declaration_with_empty_slot() {
    let unit = strict("contract C { function f() public { (uint a, , bool b) = g(); } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::VariableDeclarationStatement(decl) = &body.statements[0] else {
        panic!("expected variable declaration, got {:?}", body.statements[0].kind())
    };
    assert_eq!(decl.variables.len(), 3);
    assert!(decl.variables[1].is_none());
}

#[test]
fn try_catch_with_named_error_sets_reason_string_flag() {
    let unit = strict(
        "contract C { function f() public { \
            try this.g() returns (uint x) {} \
            catch Error(string memory reason) {} \
            catch Panic(uint code) {} \
            catch {} \
        } }",
    );
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::TryStatement(try_stmt) = &body.statements[0] else { panic!() };
    assert_eq!(try_stmt.return_parameters.len(), 1);
    assert_eq!(try_stmt.catch_clauses.len(), 3);
    let Node::CatchClause(error_clause) = &try_stmt.catch_clauses[0] else { panic!() };
    assert_eq!(error_clause.kind, "Error");
    assert!(error_clause.is_reason_string_type);
    let Node::CatchClause(panic_clause) = &try_stmt.catch_clauses[1] else { panic!() };
    assert_eq!(panic_clause.kind, "Panic");
    assert!(!panic_clause.is_reason_string_type);
    let Node::CatchClause(fallback_clause) = &try_stmt.catch_clauses[2] else { panic!() };
    assert_eq!(fallback_clause.kind, "");
    assert!(!fallback_clause.is_reason_string_type);
}

#[test]
fn try_call_followed_by_block_is_not_mistaken_for_call_options() {
    let unit = strict("contract C { function f() public { try this.g() {} catch {} } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::TryStatement(try_stmt) = &body.statements[0] else { panic!() };
    assert!(matches!(try_stmt.expression.as_ref(), Node::FunctionCall(_)));
}

// ---- inline assembly ----

#[test]
fn inline_assembly_local_definition_with_walrus_assignment() {
    let unit = strict("contract C { function f() public { assembly { let x := add(1, 2) } } }");
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::InlineAssembly(asm) = &body.statements[0] else { panic!() };
    let Node::AssemblyBlock(block) = asm.body.as_ref() else { panic!() };
    let Node::AssemblyLocalDefinition(def) = &block.operations[0] else { panic!() };
    let Node::AssemblyIdentifier(name) = &def.names[0] else { panic!() };
    assert_eq!(name.name, "x");
    let Node::AssemblyCall(call) = def.expression.as_deref().unwrap() else { panic!() };
    assert_eq!(call.function_name, "add");
    assert_eq!(call.arguments.len(), 2);
}

#[test]
fn assembly_switch_case_default_recognized_by_lexeme() {
    let unit = strict(
        "contract C { function f() public { assembly { \
            switch x case 0 { y := 1 } default { y := 2 } \
        } } }",
    );
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::InlineAssembly(asm) = &body.statements[0] else { panic!() };
    let Node::AssemblyBlock(block) = asm.body.as_ref() else { panic!() };
    let Node::AssemblySwitch(sw) = &block.operations[0] else { panic!() };
    assert_eq!(sw.cases.len(), 2);
    let Node::AssemblyCase(case0) = &sw.cases[0] else { panic!() };
    assert!(!case0.is_default);
    let Node::AssemblyCase(default_case) = &sw.cases[1] else { panic!() };
    assert!(default_case.is_default);
}

#[test]
fn assembly_for_loop() {
    let unit = strict(
        "contract C { function f() public { assembly { \
            for { let i := 0 } lt(i, 10) { i := add(i, 1) } { } \
        } } }",
    );
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    let Node::InlineAssembly(asm) = &body.statements[0] else { panic!() };
    let Node::AssemblyBlock(block) = asm.body.as_ref() else { panic!() };
    assert!(matches!(block.operations[0], Node::AssemblyFor(_)));
}

// ---- using directives ----

#[rstest]
#[case("using Lib for uint256;")]
#[case("using Lib for *;")]
#[case("using {add, sub} for uint256;")]
#[case("using Lib for uint256 global;")]
fn using_for_directive_forms(#[case] directive: &str) {
    let src = format!("contract C {{ {directive} }}");
    let unit = strict(&src);
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    assert!(matches!(c.sub_nodes[0], Node::UsingForDeclaration(_)));
}

// ---- tolerant mode ----

#[test]
fn tolerant_mode_recovers_from_garbage_contract_body() {
    let (unit, error_count) = tolerant("contract C { invalid syntax here }");
    assert!(error_count >= 1);
    assert!(matches!(unit, Node::SourceUnit(_)));
}

#[test]
fn strict_mode_rejects_the_same_input() {
    strict_err("contract C { invalid syntax here }");
}

// ---- boundary cases ----

#[test]
fn empty_input_produces_an_empty_source_unit() {
    let unit = strict("");
    match unit {
        Node::SourceUnit(u) => assert!(u.children.is_empty()),
        other => panic!("unexpected node {:?}", other.kind()),
    }
}

#[test]
fn deeply_nested_parentheses_do_not_overflow_the_stack() {
    let depth = 100;
    let src = format!(
        "contract C {{ function f() public {{ {}1{}; }} }}",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let unit = strict(&src);
    let Node::ContractDefinition(c) = only_child(&unit) else { panic!() };
    let Node::FunctionDefinition(f) = &c.sub_nodes[0] else { panic!() };
    let Node::Block(body) = f.body.as_deref().unwrap() else { panic!() };
    assert!(matches!(body.statements[0], Node::ExpressionStatement(_)));
}
