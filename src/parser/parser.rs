//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser owns its lexer and keeps two tokens of lookahead: the
//! current token and the peek token. Handlers start with the token they
//! are registered for as the current token and stop with the last token
//! of their construct as the current token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Operator precedences

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::{Node, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
        PrecedenceLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest nesting of prefix operators and parentheses accepted in one expression.
pub const MAX_EXPR_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, owned for the parser's whole lifetime
    lexer: Lexer,
    /// Token under examination
    current_token: Token,
    /// Token after `current_token`
    peek_token: Token,
    /// Diagnostics in order of discovery
    errors: Vec<Error>,
    /// Expressions currently being parsed, innermost included
    depth: usize,
    /// Set once the depth limit is hit, until the outermost expression unwinds
    bailing: bool,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix operator precedence
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a parser that takes ownership of `lexer` and primes both lookahead slots.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            depth: 0,
            bailing: false,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peek token is of kind `expected`.
    ///
    /// Otherwise records an expectation error and leaves the cursor where it is.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = ErrorImpl::UnexpectedPeek {
            expected,
            actual: self.peek_token.kind,
        };
        self.push_error(error, self.peek_token.span.start);
    }

    pub fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        self.push_error(
            ErrorImpl::NoPrefixParseFn { kind },
            self.current_token.span.start,
        );
    }

    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        debug!(position = position.0, %error, "parse error");
        self.errors.push(Error::new(error, position));
    }

    /// Enters one level of expression nesting.
    ///
    /// Returns `false` when the expression must not be parsed. On reaching
    /// [`MAX_EXPR_DEPTH`] a single error is recorded and the rest of the
    /// statement is skipped up to its `;` or the end of input.
    pub fn enter_expr(&mut self) -> bool {
        if self.bailing {
            return false;
        }

        if self.depth >= MAX_EXPR_DEPTH {
            self.push_error(
                ErrorImpl::NestedTooDeeply {
                    limit: MAX_EXPR_DEPTH,
                },
                self.current_token.span.start,
            );
            self.bailing = true;
            while !self.peek_token_is(TokenKind::Semicolon)
                && !self.peek_token_is(TokenKind::EndOfInput)
            {
                self.next_token();
            }
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn exit_expr(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.bailing = false;
        }
    }

    /// Whether the current statement is being abandoned after hitting the depth limit.
    pub fn is_bailing(&self) -> bool {
        self.bailing
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - The binding strength of this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LEDHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until `EndOfInput`.
    ///
    /// Never fails: malformed statements are recorded in the error list and
    /// skipped, so callers must check [`Parser::errors`] rather than the
    /// statement count.
    #[tracing::instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EndOfInput) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            literal = %program.token_literal(),
            "parsed program"
        );
        program
    }

    /// Rendered diagnostics, in order of discovery.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Structured diagnostics, in order of discovery.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_diagnostics(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses `source` into a [`Program`] along with every diagnostic found.
///
/// This is the main entry point for parsing.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}
