use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for Avocat source text
///
/// Tokens are produced lazily, one per pull, through the [`Iterator`]
/// implementation. The sequence is not restartable, and the first error is
/// terminal: every subsequent pull yields the same error again.
pub struct Scanner {
    /// Source code as character vector, always newline-terminated
    source: Vec<char>,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: u32,
    /// Current column number (1-indexed)
    column: u32,
    /// Terminal error, re-yielded on every pull after the first failure
    failed: Option<Error>,
}

impl Scanner {
    /// Creates a new scanner from source code
    ///
    /// A trailing newline is appended if absent, so every logical line,
    /// including the last, is terminated by a `NewLine` token.
    pub fn new(source: &str) -> Self {
        let mut chars: Vec<char> = source.chars().collect();
        if chars.last() != Some(&'\n') {
            chars.push('\n');
        }
        Scanner {
            source: chars,
            current: 0,
            line: 1,
            column: 1,
            failed: None,
        }
    }

    /// Scans the remaining tokens and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.by_ref().collect()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    /// Consumes one character, keeping the line/column counters current
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn next_token(&mut self) -> Option<Result<Token>> {
        loop {
            let c = self.peek()?;
            let line = self.line;
            let column = self.column;

            if c.is_alphabetic() {
                return Some(Ok(self.scan_word(line, column)));
            }
            if c.is_ascii_digit() {
                return Some(Ok(self.scan_number(line, column)));
            }

            let kind = match c {
                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                '=' => TokenKind::Equal,
                ':' => TokenKind::TwoPoints,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Multiply,
                '\n' => TokenKind::NewLine,
                '"' => return Some(self.scan_string(line, column)),
                '\'' => return Some(self.scan_char(line, column)),
                '#' => {
                    self.skip_comment();
                    continue;
                }
                c if c.is_whitespace() => {
                    self.advance();
                    continue;
                }
                _ => {
                    return Some(Err(Error::syntax("Caractère inattendu.", line, column)));
                }
            };

            self.advance();
            let token = Token::bare(kind, line, column);
            tracing::trace!(%token, "token produced");
            return Some(Ok(token));
        }
    }

    /// Scans a letter-initiated run: a keyword or an identifier
    fn scan_word(&mut self, line: u32, column: u32) -> Token {
        let mut text = String::new();
        text.push(self.advance());
        while matches!(self.peek(), Some(c) if c.is_alphanumeric()) {
            text.push(self.advance());
        }

        match TokenKind::keyword(&text) {
            Some(kind) => Token::bare(kind, line, column),
            None => Token::new(TokenKind::Identifier, text, line, column),
        }
    }

    /// Scans a digit-initiated run of digits and dots
    ///
    /// The text is the raw captured run; a run with several dots still lexes
    /// as a single Float token, malformed numbers are not rejected here.
    fn scan_number(&mut self, line: u32, column: u32) -> Token {
        let mut text = String::new();
        text.push(self.advance());
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            text.push(self.advance());
        }

        let kind = if text.contains('.') {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, text, line, column)
    }

    /// Scans a string literal, escape sequences kept raw in the text
    fn scan_string(&mut self, line: u32, column: u32) -> Result<Token> {
        // Opening quote
        self.advance();

        let mut text = String::new();
        let mut escaped = false;
        loop {
            match self.peek() {
                None => {
                    return Err(Error::syntax("'\"' attendu.", self.line, self.column));
                }
                Some('\n') if !escaped => {
                    return Err(Error::syntax("'\"' attendu.", self.line, self.column));
                }
                Some('"') if !escaped => break,
                Some(c) => {
                    self.advance();
                    text.push(c);
                    escaped = c == '\\';
                }
            }
        }

        // Closing quote, consumed and excluded from the text
        self.advance();
        Ok(Token::new(TokenKind::String, text, line, column))
    }

    /// Scans a character literal: a single letter, digit or whitespace
    /// between single quotes
    fn scan_char(&mut self, line: u32, column: u32) -> Result<Token> {
        // Opening quote
        self.advance();

        let c = match self.peek() {
            None => {
                return Err(Error::syntax(
                    "Un caractère est attendu.",
                    self.line,
                    self.column,
                ));
            }
            Some(c) => c,
        };

        if !(c.is_alphanumeric() || c.is_whitespace()) || self.peek_next() != Some('\'') {
            return Err(Error::syntax("''' est attendu.", self.line, self.column));
        }

        // The character, then the closing quote
        self.advance();
        self.advance();
        Ok(Token::new(TokenKind::Char, c.to_string(), line, column))
    }

    /// Discards a `#` comment up to and including the line's newline
    fn skip_comment(&mut self) {
        while matches!(self.peek(), Some(c) if c != '\n') {
            self.advance();
        }
        if self.peek() == Some('\n') {
            self.advance();
        }
    }
}

impl Iterator for Scanner {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = &self.failed {
            return Some(Err(err.clone()));
        }
        match self.next_token() {
            Some(Err(err)) => {
                self.failed = Some(err.clone());
                Some(Err(err))
            }
            other => other,
        }
    }
}
