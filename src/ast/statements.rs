use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expr, expressions::Identifier};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    /// The `let` token
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    /// The `return` token
    pub token: Token,
    pub value: Expr,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token.value, self.value)
    }
}

/// An expression standing on its own, e.g. `x + 1;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
