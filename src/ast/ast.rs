use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BooleanLiteral, Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Root of a parsed source: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Literal of the token that introduced the first statement, or an
    /// empty string for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
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

/// Statement Types
///
/// Every statement kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => &stmt.token.value,
            Stmt::Return(stmt) => &stmt.token.value,
            Stmt::Expression(stmt) => &stmt.token.value,
        }
    }

    /// Returns the span from the introducing token to the end of the value.
    pub fn get_span(&self) -> Span {
        let (start, value) = match self {
            Stmt::Let(stmt) => (stmt.token.span, &stmt.value),
            Stmt::Return(stmt) => (stmt.token.span, &stmt.value),
            Stmt::Expression(stmt) => (stmt.token.span, &stmt.expression),
        };

        Span {
            start: start.start,
            end: value.get_span().end.max(start.end),
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

/// Expression Types
///
/// Grouping has no variant: a parenthesised expression parses straight to
/// its inner expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expr {
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => &expr.token.value,
            Expr::Integer(expr) => &expr.token.value,
            Expr::Boolean(expr) => &expr.token.value,
            Expr::Prefix(expr) => &expr.token.value,
            Expr::Infix(expr) => &expr.token.value,
        }
    }

    pub fn get_span(&self) -> Span {
        match self {
            Expr::Identifier(expr) => expr.token.span,
            Expr::Integer(expr) => expr.token.span,
            Expr::Boolean(expr) => expr.token.span,
            Expr::Prefix(expr) => Span {
                start: expr.token.span.start,
                end: expr.right.get_span().end,
            },
            Expr::Infix(expr) => Span {
                start: expr.left.get_span().start,
                end: expr.right.get_span().end,
            },
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Boolean(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
        }
    }
}
