//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level entry
//! points. The parser keeps a two-token window over the lexer (current and
//! peek) and collects diagnostics instead of stopping at the first error.
//!
//! Dispatch is table driven, see [`super::lookups`]:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use log::{debug, info};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// How many expressions may be open at once before the parser gives up on
/// the statement. Keeps deeply nested input off the end of the call stack.
pub const MAX_EXPR_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Tokens are pulled from the lexer on demand. One parser handles exactly
/// one source; it is not meant to be shared between threads.
pub struct Parser<'a> {
    /// Token source, borrowing the input text
    lexer: Lexer<'a>,
    /// The token under examination
    current_token: Token,
    /// The token after `current_token`
    peek_token: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser and fills the current/peek window.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the window by one token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = std::mem::replace(&mut self.peek_token, next);
        std::mem::replace(&mut self.current_token, peek)
    }

    /// Advances only if the lookahead token is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) with the expected token now current, otherwise an
    /// `UnexpectedToken` error pointing at the lookahead token.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token.is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    actual: self.peek_token.kind,
                },
                self.peek_token.span,
            ))
        }
    }

    /// Opens one level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` at the current token once
    /// [`MAX_EXPR_DEPTH`] levels are open. Every successful call must be
    /// paired with [`Parser::leave_expr`].
    pub fn enter_expr(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_EXPR_DEPTH,
                },
                self.current_token.span,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_expr(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.current_token.is(TokenKind::EOF)
    }

    /// Records a diagnostic. Parsing carries on afterwards.
    pub fn record_error(&mut self, error: Error) {
        let span = error.get_span();
        debug!("parse error at {}..{}: {}", span.start, span.end, error);
        self.errors.push(error);
    }

    /// Diagnostics recorded so far, in discovery order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until EOF.
    ///
    /// A failed statement contributes a diagnostic instead of a node. The
    /// parser always moves one token forward after each attempt, so
    /// malformed input cannot stall the loop.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.record_error(error),
            }
            self.advance();
        }

        program
    }
}

/// Parses a source string into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. The tree is only trustworthy
/// when the returned diagnostics are empty.
///
/// # Returns
///
/// A tuple containing:
/// - The Program root (possibly partial)
/// - Every diagnostic recorded along the way
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    info!("parsing {} bytes", source.len());

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();

    info!("parsed {} statements with {} errors", program.len(), errors.len());

    (program, errors)
}
