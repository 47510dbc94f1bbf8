//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Single and two-character operators and delimiters
//! - Identifiers and keyword resolution
//! - Decimal integer literals
//! - Illegal characters, surfaced as tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
