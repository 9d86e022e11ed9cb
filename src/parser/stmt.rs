use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

fn consume_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }
}

fn span_from(parser: &Parser, start: &Span) -> Span {
    Span {
        start: start.start,
        end: parser.current_token().span.end,
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name_token = parser.current_token().clone();
    let name = Identifier {
        name: name_token.literal.clone(),
        span: name_token.span,
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.next_token();
    let value = parse_expr(parser, Precedence::Lowest);
    consume_optional_semicolon(parser);

    Some(Stmt::Let(LetStmt {
        span: span_from(parser, &start_token.span),
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();
    parser.next_token();

    // `return;` and a trailing `return` carry no value
    let value = if parser.current_token_is(TokenKind::Semicolon)
        || parser.current_token_is(TokenKind::EndOfInput)
    {
        None
    } else {
        let value = parse_expr(parser, Precedence::Lowest);
        consume_optional_semicolon(parser);
        value
    };

    Some(Stmt::Return(ReturnStmt {
        span: span_from(parser, &start_token.span),
        token: start_token,
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest);
    consume_optional_semicolon(parser);

    Some(Stmt::Expression(ExpressionStmt {
        span: span_from(parser, &start_token.span),
        token: start_token,
        expression,
    }))
}
