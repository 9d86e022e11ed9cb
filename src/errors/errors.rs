use std::fmt::Display;

use crate::{get_line_at_position, lexer::tokens::TokenKind, Position};

/// A parse diagnostic together with the position of the offending token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// 1-based line and 0-based column of the error within `source`.
    pub fn get_line_column(&self, source: &str) -> (usize, usize) {
        let (line, _, column) = get_line_at_position(source, self.position);
        (line, column)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedPeek { .. } => "UnexpectedPeek",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestedTooDeeply { .. } => "NestedTooDeeply",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedPeek { expected: TokenKind::Assign, .. } => {
                ErrorTip::Suggestion(String::from("a `let` binding needs `=` after its name"))
            }
            ErrorImpl::UnexpectedPeek { expected: TokenKind::RParen, .. } => {
                ErrorTip::Suggestion(String::from("did you forget a closing `)`?"))
            }
            ErrorImpl::UnexpectedPeek { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFn { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit integer limit?",
                literal
            )),
            ErrorImpl::NestedTooDeeply { limit } => ErrorTip::Suggestion(format!(
                "split the expression up with `let` bindings, at most {} levels of `(` or prefix operators are allowed",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedPeek { expected: TokenKind, actual: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression nested too deeply (limit {limit})")]
    NestedTooDeeply { limit: usize },
}
