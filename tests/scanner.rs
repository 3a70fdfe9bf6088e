//! Scanner unit tests: one case function, many `#[case]` inputs (spec.md §4.1).

use rstest::rstest;
use solidity_syntax::scanner::{Scanner, TokenKind};

#[rstest]
#[case("uint256", TokenKind::UintN(256))]
#[case("uint", TokenKind::Uint)]
#[case("int8", TokenKind::IntN(8))]
#[case("bytes32", TokenKind::BytesN(32))]
#[case("bytes", TokenKind::Bytes)]
#[case("address", TokenKind::Address)]
#[case("bool", TokenKind::Bool)]
#[case("string", TokenKind::StringType)]
#[case("fixed128x18", TokenKind::FixedMN(128, 18))]
#[case("ufixed8x2", TokenKind::UfixedMN(8, 2))]
fn elementary_type_keywords(#[case] input: &str, #[case] expected: TokenKind) {
    let tokens = Scanner::tokenize(input);
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].value, input);
}

#[rstest]
#[case("switch")]
#[case("case")]
#[case("default")]
#[case("leave")]
fn assembly_only_words_are_plain_identifiers(#[case] input: &str) {
    let tokens = Scanner::tokenize(input);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, input);
}

#[rstest]
#[case("break", TokenKind::Break)]
#[case("continue", TokenKind::Continue)]
#[case("contract", TokenKind::Contract)]
#[case("function", TokenKind::Function)]
fn reserved_words_keep_their_own_kind(#[case] input: &str, #[case] expected: TokenKind) {
    let tokens = Scanner::tokenize(input);
    assert_eq!(tokens[0].kind, expected);
}

#[rstest]
#[case("=>", TokenKind::DoubleArrow)]
#[case("->", TokenKind::Arrow)]
#[case(":=", TokenKind::ColonEq)]
#[case("**", TokenKind::StarStar)]
#[case(">>>", TokenKind::Sar)]
#[case(">>>=", TokenKind::SarEq)]
fn multi_character_operators(#[case] input: &str, #[case] expected: TokenKind) {
    let tokens = Scanner::tokenize(input);
    assert_eq!(tokens[0].kind, expected);
}

#[test]
fn walrus_operator_is_not_confused_with_colon_then_assign() {
    let tokens = Scanner::tokenize(": =");
    assert_eq!(tokens[0].kind, TokenKind::Colon);
    assert_eq!(tokens[1].kind, TokenKind::Assign);
}

#[rstest]
#[case("123", "123")]
#[case("1_000_000", "1000000")]
#[case("0x1A", "0x1A")]
fn number_literals(#[case] input: &str, #[case] expected_value: &str) {
    let tokens = Scanner::tokenize(input);
    assert!(matches!(tokens[0].kind, TokenKind::Number | TokenKind::HexNumber));
    assert_eq!(tokens[0].value, expected_value);
}

#[test]
fn sub_denomination_is_attached_to_the_number_token() {
    let tokens = Scanner::tokenize("1 ether");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(
        tokens[0].sub_denomination,
        Some(solidity_syntax::scanner::SubDenomination::Ether)
    );
}

#[test]
fn unterminated_string_stops_at_newline() {
    let tokens = Scanner::tokenize("\"abc\ndef");
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Illegal) || tokens[0].kind == TokenKind::String);
}

#[test]
fn every_source_ends_in_eof() {
    for src in ["", "contract C {}", "   \n\t  "] {
        let tokens = Scanner::tokenize(src);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn positions_are_one_indexed_lines_zero_indexed_columns() {
    let tokens = Scanner::tokenize("a\nbb");
    let a = &tokens[0];
    assert_eq!(a.line, 1);
    assert_eq!(a.column, 0);
    let bb = &tokens[1];
    assert_eq!(bb.line, 2);
    assert_eq!(bb.column, 0);
}

proptest::proptest! {
    #[test]
    fn tokenizing_never_panics(src in ".{0,200}") {
        let _ = Scanner::tokenize(&src);
    }

    #[test]
    fn adjacent_identifier_chars_form_one_token(name in "[a-zA-Z_][a-zA-Z0-9_]{0,30}") {
        let tokens = Scanner::tokenize(&name);
        prop_assert!(tokens[0].kind != TokenKind::Illegal);
        prop_assert_eq!(&tokens[0].value[..], &name[..]);
    }
}
