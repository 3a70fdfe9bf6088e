//! Byte-stream to token-stream scanner (spec.md §4.1).
//!
//! The scanner is eager: [`Scanner::tokenize`] walks the whole input once and returns every
//! token up front, terminated by a single `Eof`. This keeps the builder's multi-token lookahead
//! simple (spec.md §2) at the cost of holding the full token vector in memory.

use super::keywords;
use super::token::{SubDenomination, Token, TokenKind};

pub struct Scanner<'a> {
    src: &'a [u8],
    /// Current byte offset.
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            src: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    pub fn tokenize(source: &'a str) -> Vec<Token> {
        let mut scanner = Self::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            let is_eof = token.is_eof();
            log::trace!("scanner emitted {:?} {:?}", token.kind, token.value);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_byte(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.src.get(self.pos + offset).copied()
    }

    fn advance_byte(&mut self) -> Option<u8> {
        let b = self.peek_byte()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 0;
        } else if b == b'\r' {
            // Treat a lone CR, or the CR half of CRLF, as not advancing the line itself;
            // the following LF (if any) performs the line increment. This keeps positions
            // consistent whether the source uses LF or CRLF line endings.
        } else {
            self.column += 1;
        }
        Some(b)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek_byte() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.advance_byte();
                }
                Some(b'/') if self.peek_byte_at(1) == Some(b'/') => {
                    while let Some(b) = self.peek_byte() {
                        if b == b'\n' {
                            break;
                        }
                        self.advance_byte();
                    }
                }
                Some(b'/') if self.peek_byte_at(1) == Some(b'*') => {
                    self.advance_byte();
                    self.advance_byte();
                    loop {
                        match self.peek_byte() {
                            None => break,
                            Some(b'*') if self.peek_byte_at(1) == Some(b'/') => {
                                self.advance_byte();
                                self.advance_byte();
                                break;
                            }
                            Some(_) => {
                                self.advance_byte();
                            }
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn make_token(
        &self,
        kind: TokenKind,
        value: String,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> Token {
        Token {
            kind,
            value,
            line: start_line,
            column: start_col,
            start,
            end: self.pos,
            sub_denomination: None,
        }
    }

    fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(b) = self.peek_byte() else {
            return self.make_token(TokenKind::Eof, String::new(), start, start_line, start_col);
        };

        if is_ident_start(b) {
            return self.scan_identifier_or_keyword(start, start_line, start_col);
        }
        if b.is_ascii_digit() {
            return self.scan_number(start, start_line, start_col);
        }
        if b == b'"' || b == b'\'' {
            return self.scan_string(b, start, start_line, start_col);
        }

        self.scan_operator(start, start_line, start_col)
    }

    fn scan_identifier_or_keyword(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> Token {
        while let Some(b) = self.peek_byte() {
            if is_ident_continue(b) {
                self.advance_byte();
            } else {
                break;
            }
        }
        let text = std::str::from_utf8(&self.src[start..self.pos])
            .expect("identifier bytes are ASCII")
            .to_string();

        // `hex"..."` / `unicode"..."` fold into a single dedicated token, bypassing the
        // ordinary keyword table (see SPEC_FULL.md §4.1 and DESIGN.md for the Open Question
        // this resolves).
        if text == "hex" && matches!(self.peek_byte(), Some(b'"') | Some(b'\'')) {
            let quote = self.peek_byte().unwrap();
            let mut string_tok = self.scan_string(quote, start, start_line, start_col);
            string_tok.kind = TokenKind::HexString;
            return string_tok;
        }
        if text == "unicode" && matches!(self.peek_byte(), Some(b'"') | Some(b'\'')) {
            let quote = self.peek_byte().unwrap();
            let mut string_tok = self.scan_string(quote, start, start_line, start_col);
            string_tok.kind = TokenKind::UnicodeString;
            return string_tok;
        }

        let kind = keywords::classify(&text);
        self.make_token(kind, text, start, start_line, start_col)
    }

    fn scan_number(&mut self, start: usize, start_line: usize, start_col: usize) -> Token {
        let is_hex = self.peek_byte() == Some(b'0')
            && matches!(self.peek_byte_at(1), Some(b'x') | Some(b'X'));

        if is_hex {
            self.advance_byte(); // '0'
            self.advance_byte(); // 'x'/'X'
            while let Some(b) = self.peek_byte() {
                if b.is_ascii_hexdigit() || b == b'_' {
                    self.advance_byte();
                } else {
                    break;
                }
            }
            let raw = std::str::from_utf8(&self.src[start..self.pos]).unwrap();
            let value = raw.replace('_', "");
            return self.make_token(TokenKind::HexNumber, value, start, start_line, start_col);
        }

        while let Some(b) = self.peek_byte() {
            if b.is_ascii_digit() || b == b'_' {
                self.advance_byte();
            } else {
                break;
            }
        }
        if self.peek_byte() == Some(b'.') && self.peek_byte_at(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance_byte(); // '.'
            while let Some(b) = self.peek_byte() {
                if b.is_ascii_digit() || b == b'_' {
                    self.advance_byte();
                } else {
                    break;
                }
            }
        }
        if matches!(self.peek_byte(), Some(b'e') | Some(b'E')) {
            let mut lookahead = 1;
            if matches!(self.peek_byte_at(1), Some(b'+') | Some(b'-')) {
                lookahead += 1;
            }
            if self.peek_byte_at(lookahead).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..lookahead {
                    self.advance_byte();
                }
                while let Some(b) = self.peek_byte() {
                    if b.is_ascii_digit() || b == b'_' {
                        self.advance_byte();
                    } else {
                        break;
                    }
                }
            }
        }

        let raw = std::str::from_utf8(&self.src[start..self.pos]).unwrap();
        let value = raw.replace('_', "");

        // Trailing sub-denomination unit: `1 ether`, `2 days`. Trivia between the literal and
        // the unit is allowed; a speculative lookahead restores position if no unit follows.
        let save = (self.pos, self.line, self.column);
        self.skip_trivia();
        let unit_start = self.pos;
        while let Some(b) = self.peek_byte() {
            if is_ident_continue(b) {
                self.advance_byte();
            } else {
                break;
            }
        }
        let maybe_unit = std::str::from_utf8(&self.src[unit_start..self.pos]).unwrap();
        let sub_denomination = SubDenomination::from_lexeme(maybe_unit);
        if sub_denomination.is_none() {
            (self.pos, self.line, self.column) = save;
        }

        let mut token = self.make_token(TokenKind::Number, value, start, start_line, start_col);
        token.sub_denomination = sub_denomination;
        token
    }

    fn scan_string(
        &mut self,
        quote: u8,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> Token {
        self.advance_byte(); // opening quote
        let mut decoded = String::new();
        loop {
            match self.peek_byte() {
                None => break,
                Some(b'\n') => break,
                Some(b) if b == quote => {
                    self.advance_byte();
                    break;
                }
                Some(b'\\') => {
                    self.advance_byte();
                    match self.peek_byte() {
                        Some(b'n') => {
                            decoded.push('\n');
                            self.advance_byte();
                        }
                        Some(b'r') => {
                            decoded.push('\r');
                            self.advance_byte();
                        }
                        Some(b't') => {
                            decoded.push('\t');
                            self.advance_byte();
                        }
                        Some(b'\\') => {
                            decoded.push('\\');
                            self.advance_byte();
                        }
                        Some(b'\'') => {
                            decoded.push('\'');
                            self.advance_byte();
                        }
                        Some(b'"') => {
                            decoded.push('"');
                            self.advance_byte();
                        }
                        Some(other) => {
                            decoded.push(other as char);
                            self.advance_byte();
                        }
                        None => break,
                    }
                }
                Some(_) => {
                    let char_start = self.pos;
                    // Advance one UTF-8 scalar value so multi-byte characters in string
                    // literals are passed through whole (spec.md §4.1 "Inputs").
                    let width = utf8_width(self.src[char_start]);
                    for _ in 0..width {
                        if self.advance_byte().is_none() {
                            break;
                        }
                    }
                    let bytes = &self.src[char_start..self.pos];
                    decoded.push_str(&String::from_utf8_lossy(bytes));
                }
            }
        }
        self.make_token(TokenKind::String, decoded, start, start_line, start_col)
    }

    fn scan_operator(&mut self, start: usize, start_line: usize, start_col: usize) -> Token {
        // Longest-first match against the three-, two-, and one-character operator table
        // (spec.md §6.1). `>>>=` must be checked before `>>>`/`>>=`/`>>`.
        let three = self.peek_slice(3);
        let four = self.peek_slice(4);
        if four == b">>>=" {
            self.advance_n(4);
            return self.make_token(TokenKind::SarEq, ">>>=".into(), start, start_line, start_col);
        }
        if three == b">>>" {
            self.advance_n(3);
            return self.make_token(TokenKind::Sar, ">>>".into(), start, start_line, start_col);
        }

        let two = self.peek_slice(2);
        let two_kind = match two.as_slice() {
            b"=>" => Some(TokenKind::DoubleArrow),
            b"->" => Some(TokenKind::Arrow),
            b":=" => Some(TokenKind::ColonEq),
            b"==" => Some(TokenKind::Eq),
            b"!=" => Some(TokenKind::NotEq),
            b"<=" => Some(TokenKind::LtEq),
            b">=" => Some(TokenKind::GtEq),
            b"&&" => Some(TokenKind::AndAnd),
            b"||" => Some(TokenKind::OrOr),
            b"<<" => Some(TokenKind::Shl),
            b">>" => Some(TokenKind::Shr),
            b"**" => Some(TokenKind::StarStar),
            b"++" => Some(TokenKind::PlusPlus),
            b"--" => Some(TokenKind::MinusMinus),
            b"+=" => Some(TokenKind::PlusEq),
            b"-=" => Some(TokenKind::MinusEq),
            b"*=" => Some(TokenKind::StarEq),
            b"/=" => Some(TokenKind::SlashEq),
            b"%=" => Some(TokenKind::PercentEq),
            b"&=" => Some(TokenKind::AndEq),
            b"|=" => Some(TokenKind::OrEq),
            b"^=" => Some(TokenKind::XorEq),
            _ => None,
        };
        // `<<=` and `>>=` are three-char forms that share a two-char prefix with `<<`/`>>`.
        if two.as_slice() == b"<<" && self.peek_byte_at(2) == Some(b'=') {
            self.advance_n(3);
            return self.make_token(TokenKind::ShlEq, "<<=".into(), start, start_line, start_col);
        }
        if two.as_slice() == b">>" && self.peek_byte_at(2) == Some(b'=') {
            self.advance_n(3);
            return self.make_token(TokenKind::ShrEq, ">>=".into(), start, start_line, start_col);
        }
        if let Some(kind) = two_kind {
            let text = String::from_utf8(two).unwrap();
            self.advance_n(2);
            return self.make_token(kind, text, start, start_line, start_col);
        }

        let one_kind = match self.peek_byte() {
            Some(b'(') => TokenKind::LParen,
            Some(b')') => TokenKind::RParen,
            Some(b'[') => TokenKind::LBracket,
            Some(b']') => TokenKind::RBracket,
            Some(b'{') => TokenKind::LBrace,
            Some(b'}') => TokenKind::RBrace,
            Some(b':') => TokenKind::Colon,
            Some(b';') => TokenKind::Semicolon,
            Some(b'.') => TokenKind::Dot,
            Some(b',') => TokenKind::Comma,
            Some(b'?') => TokenKind::Question,
            Some(b'=') => TokenKind::Assign,
            Some(b'<') => TokenKind::Lt,
            Some(b'>') => TokenKind::Gt,
            Some(b'!') => TokenKind::Not,
            Some(b'&') => TokenKind::BitAnd,
            Some(b'|') => TokenKind::BitOr,
            Some(b'^') => TokenKind::BitXor,
            Some(b'~') => TokenKind::BitNot,
            Some(b'+') => TokenKind::Plus,
            Some(b'-') => TokenKind::Minus,
            Some(b'*') => TokenKind::Star,
            Some(b'/') => TokenKind::Slash,
            Some(b'%') => TokenKind::Percent,
            Some(other) => {
                self.advance_byte();
                return self.make_token(
                    TokenKind::Illegal,
                    (other as char).to_string(),
                    start,
                    start_line,
                    start_col,
                );
            }
            None => unreachable!("caller already checked for Eof"),
        };
        let text = (self.peek_byte().unwrap() as char).to_string();
        self.advance_byte();
        self.make_token(one_kind, text, start, start_line, start_col)
    }

    fn peek_slice(&self, n: usize) -> Vec<u8> {
        let end = (self.pos + n).min(self.src.len());
        self.src[self.pos..end].to_vec()
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance_byte();
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn utf8_width(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}
