use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::Precedence, parser::Parser};

/// Parses one expression whose operators bind tighter than `precedence`.
///
/// Returns `None` after recording a diagnostic when no expression starts at
/// the current token, or when nesting exceeds the parser's depth limit.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    if !parser.enter_expr() {
        return None;
    }

    let expr = parse_nested_expr(parser, precedence);
    parser.exit_expr();
    expr
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => {
            parser.no_prefix_parse_fn_error(token_kind);
            return None;
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let led = match parser.get_led_lookup().get(&parser.peek_token().kind).copied() {
            Some(led) => led,
            None => return Some(left),
        };

        parser.next_token();
        let operator_precedence = parser.current_precedence();
        left = led(parser, left, operator_precedence)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(Identifier {
        name: token.literal.clone(),
        span: token.span,
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerLiteral {
            value,
            span: token.span,
            token,
        })),
        Err(_) => {
            parser.push_error(
                ErrorImpl::IntegerParseError {
                    literal: token.literal,
                },
                token.span.start,
            );
            None
        }
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let operand = parse_expr(parser, Precedence::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end,
        },
        operator: operator_token.literal.clone(),
        token: operator_token,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, precedence: Precedence) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, precedence)?;

    Some(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Option<Expr> {
    parser.next_token();
    let expr = parse_expr(parser, Precedence::Lowest);

    // The statement was already skipped; a missing `)` would only repeat the error
    if parser.is_bailing() {
        return None;
    }

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    expr
}
