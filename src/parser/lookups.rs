use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first. Derived ordering is the ladder.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr) -> Result<Expr, Error>;

/// Binding power of a token in infix position. Anything that is not an
/// infix operator binds at `Lowest`.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        _ => BindingPower::Lowest,
    }
}

/// Statement handlers for tokens that open a dedicated statement form.
/// Every other token starts an expression statement.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        _ => None,
    }
}

/// Handlers for tokens that can begin an expression.
pub fn nud_handler(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        TokenKind::Identifier => Some(parse_identifier_expr),
        TokenKind::Int => Some(parse_integer_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean_expr),
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        _ => None,
    }
}

/// Handlers for tokens that continue an already parsed left operand.
pub fn led_handler(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater => Some(parse_infix_expr),
        _ => None,
    }
}
