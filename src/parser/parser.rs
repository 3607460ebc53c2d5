use super::ast::{EType, Expression, Statement};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser for Avocat
///
/// Pulls tokens one at a time from any fallible token source, with a single
/// token of lookahead and no token buffer. Statements are produced lazily
/// through the [`Iterator`] implementation; consuming one element drives
/// exactly one statement's worth of parsing. The first error is terminal:
/// every subsequent pull yields the same error again.
pub struct Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    tokens: I,
    /// One-token lookahead
    lookahead: Option<Token>,
    /// Position of the most recently pulled token, for end-of-input errors
    line: u32,
    column: u32,
    /// Terminal error, re-yielded on every pull after the first failure
    failed: Option<Error>,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    /// Creates a new parser over a token sequence
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens,
            lookahead: None,
            line: 1,
            column: 1,
            failed: None,
        }
    }

    /// Parses the remaining statements and returns them as a vector
    pub fn parse(&mut self) -> Result<Vec<Statement>> {
        self.by_ref().collect()
    }

    fn fetch(&mut self) -> Result<Option<Token>> {
        match self.tokens.next().transpose()? {
            Some(token) => {
                self.line = token.line;
                self.column = token.column;
                Ok(Some(token))
            }
            None => Ok(None),
        }
    }

    /// Consumes and returns the next token
    fn pull(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.lookahead.take() {
            Ok(Some(token))
        } else {
            self.fetch()
        }
    }

    /// Peeks at the next token without consuming it
    fn peek(&mut self) -> Result<Option<&Token>> {
        if self.lookahead.is_none() {
            self.lookahead = self.fetch()?;
        }
        Ok(self.lookahead.as_ref())
    }

    /// Consumes the next token, requiring it to be of the given kind
    fn expect(&mut self, expected: TokenKind) -> Result<Token> {
        match self.pull()? {
            Some(token) if token.kind == expected => Ok(token),
            Some(token) => Err(Error::syntax(
                expected_message(expected),
                token.line,
                token.column,
            )),
            None => Err(Error::syntax(
                expected_message(expected),
                self.line,
                self.column,
            )),
        }
    }

    fn parse_statement(&mut self, first: Token) -> Result<Statement> {
        tracing::trace!(line = first.line, kind = ?first.kind, "parsing statement");
        match first.kind {
            TokenKind::Var => self.parse_var(),
            TokenKind::Exit => self.parse_exit(first),
            TokenKind::NewLine => Ok(Statement::Eof(first)),
            _ => Err(Error::syntax("Jeton inattendu.", first.line, first.column)),
        }
    }

    /// `dec name [: type] = expression NewLine`
    fn parse_var(&mut self) -> Result<Statement> {
        let name = self.expect(TokenKind::Identifier)?;

        let mut declared_type = EType::Null;
        if matches!(self.peek()?, Some(token) if token.kind == TokenKind::TwoPoints) {
            self.pull()?;
            declared_type = self.parse_declared_type()?;
        }

        self.expect(TokenKind::Equal)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::NewLine)?;

        Ok(Statement::Var {
            name,
            value,
            declared_type,
        })
    }

    /// Maps a type keyword token directly onto its [`EType`]
    fn parse_declared_type(&mut self) -> Result<EType> {
        match self.pull()? {
            Some(token) => match token.kind {
                TokenKind::TypeInteger => Ok(EType::Integer),
                TokenKind::TypeString => Ok(EType::String),
                TokenKind::TypeFloat => Ok(EType::Float),
                TokenKind::TypeChar => Ok(EType::Char),
                _ => Err(Error::syntax(
                    "Un type est attendu.",
                    token.line,
                    token.column,
                )),
            },
            None => Err(Error::syntax("Un type est attendu.", self.line, self.column)),
        }
    }

    /// `terminer ( expression ) NewLine`
    fn parse_exit(&mut self, keyword: Token) -> Result<Statement> {
        self.expect(TokenKind::OpenParen)?;
        let value = self.parse_expression()?;

        // Direct tag check, not type inference: an operation over integers
        // is still rejected here.
        if !matches!(value, Expression::Integer(_)) {
            let token = value.token();
            return Err(Error::syntax("Un entier attendu.", token.line, token.column));
        }

        self.expect(TokenKind::CloseParen)?;
        self.expect(TokenKind::NewLine)?;

        Ok(Statement::Exit {
            token: keyword,
            value,
        })
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        let token = match self.pull()? {
            Some(token) => token,
            None => {
                return Err(Error::syntax(
                    "Une expression est attendue.",
                    self.line,
                    self.column,
                ));
            }
        };

        match token.kind {
            TokenKind::Integer => {
                let left = Expression::Integer(token);
                self.parse_operation_tail(left)
            }
            TokenKind::Float => {
                let left = Expression::Float(token);
                self.parse_operation_tail(left)
            }
            TokenKind::String => Ok(Expression::String(token)),
            TokenKind::Char => Ok(Expression::Char(token)),
            TokenKind::OpenParen => {
                let inner = self.parse_expression()?;
                self.expect(TokenKind::CloseParen)?;
                Ok(inner)
            }
            _ => Err(Error::syntax("Jeton inattendu.", token.line, token.column)),
        }
    }

    /// Builds an Operation when the numeric primary is followed by an
    /// arithmetic operator
    ///
    /// The recursion runs on the right operand, so `a OP1 b OP2 c` always
    /// nests as `a OP1 (b OP2 c)` whatever the operators are.
    fn parse_operation_tail(&mut self, left: Expression) -> Result<Expression> {
        if !matches!(self.peek()?, Some(token) if token.kind.is_operator()) {
            return Ok(left);
        }
        let Some(operator) = self.pull()? else {
            return Ok(left);
        };

        if self.peek()?.is_none() {
            return Err(Error::operation(
                "Une opération arithmétique nécessite deux expressions arithmétiques.",
                operator.line,
                operator.column,
            ));
        }

        let right = self.parse_expression()?;
        if !right.is_numeric() {
            let token = right.token();
            return Err(Error::operation(
                "Un nombre est attendu.",
                token.line,
                token.column,
            ));
        }

        Ok(Expression::Operation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Diagnostic wording for a missing expected token
fn expected_message(expected: TokenKind) -> &'static str {
    match expected {
        TokenKind::OpenParen => "'(' attendu.",
        TokenKind::CloseParen => "')' attendu.",
        TokenKind::Equal => "'=' attendu.",
        TokenKind::NewLine => "Un retour à la ligne est attendu.",
        TokenKind::Identifier => "Un nom de variable est attendu.",
        _ => "Un mot-clé différent est attendu.",
    }
}

impl<I> Iterator for Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = &self.failed {
            return Some(Err(err.clone()));
        }

        let first = match self.pull() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(err) => {
                self.failed = Some(err.clone());
                return Some(Err(err));
            }
        };

        match self.parse_statement(first) {
            Ok(statement) => Some(Ok(statement)),
            Err(err) => {
                self.failed = Some(err.clone());
                Some(Err(err))
            }
        }
    }
}
