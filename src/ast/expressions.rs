use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::ast::{drop_subtrees, push_infix, push_prefix, write_pieces, Expr, Node};

// LITERALS

/// Identifier Expression
/// A user name, e.g. `foobar`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
    pub span: Span,
}

impl Node for Identifier {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Integer Expression
/// A decimal integer literal. Renders as its literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
    pub span: Span,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator applied to an operand, e.g. `-x` or `!x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub operand: Box<Expr>,
    pub span: Span,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pieces = vec![];
        push_prefix(&mut pieces, self);
        write_pieces(f, pieces)
    }
}

impl Drop for PrefixExpr {
    fn drop(&mut self) {
        drop_subtrees([&mut self.operand]);
    }
}

/// Infix Expression
/// A binary operator between two operands. The token is the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pieces = vec![];
        push_infix(&mut pieces, self);
        write_pieces(f, pieces)
    }
}

impl Drop for InfixExpr {
    fn drop(&mut self) {
        drop_subtrees([&mut self.left, &mut self.right]);
    }
}
