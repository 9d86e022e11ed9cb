use std::fmt::{Debug, Display};

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Capability shared by every AST node.
///
/// Rendering back to source-like text goes through `Display`.
pub trait Node: Debug + Display {
    /// Literal of the token the node was parsed from.
    fn token_literal(&self) -> String;
    /// Returns the source span covered by the node.
    fn get_span(&self) -> Span;
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> String {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
        }
    }
    fn get_span(&self) -> Span {
        match self {
            Stmt::Let(stmt) => stmt.get_span(),
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Expression(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression variants.
///
/// Dropping and rendering walk the tree with an explicit stack, so arbitrarily
/// long operator chains are safe. The derived `Clone`, `PartialEq` and `Debug`
/// recurse and are meant for shallow trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Node for Expr {
    fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(expr) => expr.token_literal(),
            Expr::Integer(expr) => expr.token_literal(),
            Expr::Prefix(expr) => expr.token_literal(),
            Expr::Infix(expr) => expr.token_literal(),
        }
    }
    fn get_span(&self) -> Span {
        match self {
            Expr::Identifier(expr) => expr.get_span(),
            Expr::Integer(expr) => expr.get_span(),
            Expr::Prefix(expr) => expr.get_span(),
            Expr::Infix(expr) => expr.get_span(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_pieces(f, vec![Piece::Expr(self)])
    }
}

impl Expr {
    fn has_children(&self) -> bool {
        matches!(self, Expr::Prefix(_) | Expr::Infix(_))
    }

    /// Leaf left behind in a slot whose subtree was moved out.
    fn placeholder() -> Expr {
        Expr::Integer(IntegerLiteral {
            token: Token {
                kind: TokenKind::Integer,
                literal: String::new(),
                span: Span::default(),
            },
            value: 0,
            span: Span::default(),
        })
    }
}

/// Unit of pending output while rendering an expression.
pub(crate) enum Piece<'a> {
    Expr(&'a Expr),
    Text(&'a str),
}

pub(crate) fn push_prefix<'a>(pieces: &mut Vec<Piece<'a>>, expr: &'a PrefixExpr) {
    // pushed in reverse: `(` op operand `)`
    pieces.extend([
        Piece::Text(")"),
        Piece::Expr(&*expr.operand),
        Piece::Text(&expr.operator),
        Piece::Text("("),
    ]);
}

pub(crate) fn push_infix<'a>(pieces: &mut Vec<Piece<'a>>, expr: &'a InfixExpr) {
    // pushed in reverse: `(` left ` op ` right `)`
    pieces.extend([
        Piece::Text(")"),
        Piece::Expr(&*expr.right),
        Piece::Text(" "),
        Piece::Text(&expr.operator),
        Piece::Text(" "),
        Piece::Expr(&*expr.left),
        Piece::Text("("),
    ]);
}

pub(crate) fn write_pieces(
    f: &mut std::fmt::Formatter<'_>,
    mut pieces: Vec<Piece<'_>>,
) -> std::fmt::Result {
    while let Some(piece) = pieces.pop() {
        match piece {
            Piece::Text(text) => f.write_str(text)?,
            Piece::Expr(Expr::Identifier(expr)) => f.write_str(&expr.name)?,
            Piece::Expr(Expr::Integer(expr)) => f.write_str(&expr.token.literal)?,
            Piece::Expr(Expr::Prefix(expr)) => push_prefix(&mut pieces, expr),
            Piece::Expr(Expr::Infix(expr)) => push_infix(&mut pieces, expr),
        }
    }
    Ok(())
}

fn take_child(slot: &mut Box<Expr>) -> Expr {
    std::mem::replace(&mut **slot, Expr::placeholder())
}

/// Frees the subtrees under `slots` without recursing.
///
/// Each popped node has its branch children moved onto the work stack before
/// it is dropped, so its own `Drop` only ever sees leaves.
pub(crate) fn drop_subtrees<const N: usize>(slots: [&mut Box<Expr>; N]) {
    let mut pending: Vec<Expr> = Vec::new();

    for slot in slots {
        if slot.has_children() {
            pending.push(take_child(slot));
        }
    }

    while let Some(mut expr) = pending.pop() {
        match &mut expr {
            Expr::Prefix(prefix) => {
                if prefix.operand.has_children() {
                    pending.push(take_child(&mut prefix.operand));
                }
            }
            Expr::Infix(infix) => {
                for slot in [&mut infix.left, &mut infix.right] {
                    if slot.has_children() {
                        pending.push(take_child(slot));
                    }
                }
            }
            Expr::Identifier(_) | Expr::Integer(_) => {}
        }
    }
}

/// Root of every parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Node for Program {
    fn token_literal(&self) -> String {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or_default()
    }
    fn get_span(&self) -> Span {
        match (self.statements.first(), self.statements.last()) {
            (Some(first), Some(last)) => Span {
                start: first.get_span().start,
                end: last.get_span().end,
            },
            _ => Span::default(),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
