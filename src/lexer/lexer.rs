use log::trace;

use crate::{MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Scanning cursor over a borrowed source string.
///
/// `position` is the byte offset of `ch`, `read_position` the offset of the
/// next unread character. Once the input is exhausted `ch` is `None`,
/// `position` sits at the end of the source and never moves again.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    fn read_char(&mut self) {
        self.position = self.read_position.min(self.source.len());
        self.ch = self.source[self.position..].chars().next();
        self.read_position = match self.ch {
            Some(ch) => self.position + ch.len_utf8(),
            None => self.source.len() + 1,
        };
    }

    fn peek_char(&self) -> Option<char> {
        self.source
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        MK_TOKEN!(
            kind,
            self.source[start..self.position].to_string(),
            MK_SPAN!(start, self.position - start)
        )
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }

        let kind = lookup_identifier(&self.source[start..self.position]);
        self.make_token(kind, start)
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
            self.read_char();
        }

        self.make_token(TokenKind::Int, start)
    }

    /// Scans and returns the next token. Never fails: unknown characters
    /// come back as `TokenKind::Illegal`, and an exhausted input keeps
    /// yielding `TokenKind::EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(ch) = self.ch else {
            trace!("token EOF at {}", start);
            return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(start, 0));
        };

        let kind = match ch {
            '=' if self.peek_char() == Some('=') => {
                self.read_char();
                TokenKind::Equals
            }
            '!' if self.peek_char() == Some('=') => {
                self.read_char();
                TokenKind::NotEquals
            }
            '=' => TokenKind::Assignment,
            '!' => TokenKind::Not,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Dash,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            ch if is_letter(ch) => {
                let token = self.read_identifier();
                trace!("token {} at {}", token, start);
                return token;
            }
            ch if ch.is_ascii_digit() => {
                let token = self.read_number();
                trace!("token {} at {}", token, start);
                return token;
            }
            _ => TokenKind::Illegal,
        };

        self.read_char();

        let token = self.make_token(kind, start);
        trace!("token {} at {}", token, start);
        token
    }
}

/// Yields every token up to, but not including, `TokenKind::EOF`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Tokenizes the whole source, including the terminating EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
