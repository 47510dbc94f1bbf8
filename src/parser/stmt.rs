use log::debug;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_handler, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    debug!("statement at {}", parser.current_token());

    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Consumes an optional `;` following a statement.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token().is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}
