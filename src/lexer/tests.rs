//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Illegal characters
//! - End-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let fn true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Fn);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("letx returned iff _let");

    for (token, value) in tokens.iter().zip(["letx", "returned", "iff", "_let"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, value);
    }
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("foobar"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("abc123");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "123");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 9223372036854775807");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].value, "9223372036854775807");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - * / ! < > == !=");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Not,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[8].value, "==");
    assert_eq!(tokens[9].value, "!=");
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize(",;(){}");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[2].value, "(");
}

#[test]
fn test_adjacent_operators_without_whitespace() {
    let tokens = tokenize("!!=x==!y");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_statement() {
    let tokens = tokenize("let five = 5;\nlet ten = 10;\r\n\treturn five != ten;");
    let pairs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();

    assert_eq!(
        pairs,
        vec![
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "five"),
            (TokenKind::Assignment, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "ten"),
            (TokenKind::Assignment, "="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Return, "return"),
            (TokenKind::Identifier, "five"),
            (TokenKind::NotEquals, "!="),
            (TokenKind::Identifier, "ten"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ 1 é");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "é");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  ab == 12");

    assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 3));
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (5, 7));
    assert_eq!((tokens[2].span.start, tokens[2].span.end), (8, 10));
    assert_eq!((tokens[3].span.start, tokens[3].span.end), (11, 13));
    assert_eq!((tokens[4].span.start, tokens[4].span.end), (13, 13));
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("x ");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
        assert_eq!(token.span.start, 2);
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);

    let tokens = tokenize(" \t\r\n ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let values: Vec<String> = Lexer::new("a + 1").map(|t| t.value).collect();

    assert_eq!(values, vec!["a", "+", "1"]);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::NotEquals.to_string(), "!=");
    assert_eq!(TokenKind::Fn.to_string(), "FUNCTION");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
    assert_eq!(TokenKind::Illegal.to_string(), "ILLEGAL");
}
