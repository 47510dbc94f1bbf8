use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Span};

/// A recorded, non-fatal parse failure.
///
/// `Display` renders the bare diagnostic message; the span and tip are
/// extra context for tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseParen,
                ..
            } => ErrorTip::Suggestion(String::from("did you forget a closing `)`?")),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Illegal,
            } => ErrorTip::Suggestion(String::from(
                "this character is not part of the language",
            )),
            ErrorImpl::NoPrefixParseFn { .. } => {
                ErrorTip::Suggestion(String::from("an expression cannot start with this token"))
            }
            ErrorImpl::NumberParseError { .. } => {
                ErrorTip::Suggestion(String::from("is it above the 64-bit integer limit?"))
            }
            ErrorImpl::NestingTooDeep { .. } => {
                ErrorTip::Suggestion(String::from("split the expression with `let` bindings"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, but got {actual}")]
    UnexpectedToken { expected: TokenKind, actual: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
