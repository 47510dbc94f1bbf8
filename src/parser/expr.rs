use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BooleanLiteral, Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_handler, nud_handler, BindingPower},
    parser::Parser,
};

/// Parses an expression starting at the current token.
///
/// Infix operators are folded into the left operand for as long as the
/// lookahead binds tighter than `bp`. On return the current token is the
/// last token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_expr()?;
    let result = parse_expr_at_depth(parser, bp);
    parser.leave_expr();

    result
}

fn parse_expr_at_depth(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_handler(token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.current_token().span,
        ));
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of the lookahead, continue parsing lhs
    while !parser.peek_token().is(TokenKind::Semicolon)
        && bp < binding_power(parser.peek_token_kind())
    {
        let Some(led) = led_handler(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(Identifier {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span,
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanLiteral {
        value: token.is(TokenKind::True),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let bp = binding_power(parser.current_token_kind());
    let operator_token = parser.advance();

    // Same binding power on the right keeps equal-precedence chains left-associative
    let right = parse_expr(parser, bp)?;
    trace!("infix {} at {:?}", operator_token.value, bp);

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `( <expr> )`. No node is produced for the parentheses themselves.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}
