use tracing::trace;

use crate::{Span, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Pull-based scanner over the bytes of a source string.
///
/// `position` indexes the byte held in `ch`, `read_position` the byte after it.
/// `ch` is `None` once the input is exhausted.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: Option<u8>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_position).copied();
        self.position = self.read_position.min(self.source.len());
        self.read_position = self.position + 1;
    }

    fn peek_char(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// Scans a run of letters. Leaves `ch` on the first byte after the run.
    fn read_identifier(&mut self) -> &str {
        let start = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        &self.source[start..self.position]
    }

    fn read_number(&mut self) -> &str {
        let start = self.position;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        &self.source[start..self.position]
    }

    /// Returns the next token. Once the input is exhausted every call yields `EndOfInput`.
    ///
    /// Scanning is bytewise. Any byte outside the token set, including each byte
    /// of a multi-byte UTF-8 character, becomes its own `Illegal` token whose
    /// literal is that byte read as a Latin-1 character (`0xC3` gives `"Ã"`).
    /// The span still covers exactly the one source byte.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let ch = match self.ch {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::EndOfInput, "", Span::new(start, start)),
        };

        // Word and number scanners already stop one past their run.
        if is_letter(ch) {
            let literal = self.read_identifier().to_string();
            let token = MK_TOKEN!(lookup_identifier(&literal), literal, Span::new(start, self.position));
            trace!(kind = %token.kind, literal = %token.literal, "lexed token");
            return token;
        }

        if ch.is_ascii_digit() {
            let literal = self.read_number().to_string();
            let token = MK_TOKEN!(TokenKind::Integer, literal, Span::new(start, self.position));
            trace!(kind = %token.kind, literal = %token.literal, "lexed token");
            return token;
        }

        let (kind, literal) = match ch {
            b'=' => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    (TokenKind::Equal, String::from("=="))
                } else {
                    (TokenKind::Assign, String::from("="))
                }
            }
            b'!' => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    (TokenKind::NotEqual, String::from("!="))
                } else {
                    (TokenKind::Bang, String::from("!"))
                }
            }
            b'+' => (TokenKind::Plus, String::from("+")),
            b'-' => (TokenKind::Minus, String::from("-")),
            b'*' => (TokenKind::Asterisk, String::from("*")),
            b'/' => (TokenKind::Slash, String::from("/")),
            b'<' => (TokenKind::LessThan, String::from("<")),
            b'>' => (TokenKind::GreaterThan, String::from(">")),
            b',' => (TokenKind::Comma, String::from(",")),
            b';' => (TokenKind::Semicolon, String::from(";")),
            b'(' => (TokenKind::LParen, String::from("(")),
            b')' => (TokenKind::RParen, String::from(")")),
            b'{' => (TokenKind::LBrace, String::from("{")),
            b'}' => (TokenKind::RBrace, String::from("}")),
            other => (TokenKind::Illegal, char::from(other).to_string()),
        };

        let token = MK_TOKEN!(kind, literal, Span::new(start, self.position + 1));
        self.read_char();

        trace!(kind = %token.kind, literal = %token.literal, "lexed token");
        token
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Lexes `source` up to and including the first `EndOfInput` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
