use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::{Token, TokenKind};

/// Declared type of a variable
///
/// A declaration without a type annotation carries [`EType::Null`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EType {
    /// No type annotation
    #[default]
    Null,
    /// `entier`
    Integer,
    /// `chaine`
    String,
    /// `flottant`
    Float,
    /// `caractere`
    Char,
}

/// Expressions
///
/// A closed set of variants, each retaining its originating token for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Integer literal expression
    Integer(Token),
    /// Floating-point literal expression
    Float(Token),
    /// String literal expression
    String(Token),
    /// Character literal expression
    Char(Token),
    /// Arithmetic operation, always right-nested since the grammar has no
    /// precedence levels
    Operation {
        /// Operator token (+, - or *)
        operator: Token,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
    },
    /// End-of-input marker expression
    Eof(Token),
}

impl Expression {
    /// Whether the expression may participate in arithmetic
    ///
    /// Only the Integer and Float variants are numeric; an Operation is not,
    /// even when both of its operands are.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Expression::Integer(_) | Expression::Float(_))
    }

    /// Originating token (the operator token for an Operation)
    pub fn token(&self) -> &Token {
        match self {
            Expression::Integer(token)
            | Expression::Float(token)
            | Expression::String(token)
            | Expression::Char(token)
            | Expression::Eof(token) => token,
            Expression::Operation { operator, .. } => operator,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer(token)
            | Expression::Float(token)
            | Expression::Char(token) => write!(f, "Expr<{}>", token.text),
            Expression::String(token) => write!(f, "Expr<\"{}\">", token.text),
            Expression::Operation {
                operator,
                left,
                right,
            } => {
                let symbol = match operator.kind {
                    TokenKind::Plus => '+',
                    TokenKind::Minus => '-',
                    _ => '*',
                };
                write!(f, "Oper<{} {} {}>", left, symbol, right)
            }
            Expression::Eof(_) => write!(f, "EOF"),
        }
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Variable declaration: `dec name [: type] = expression`
    Var {
        /// Identifier token carrying the variable name
        name: Token,
        /// Declared value
        value: Expression,
        /// Type annotation, `EType::Null` when absent
        declared_type: EType,
    },
    /// Program exit: `terminer(expression)`
    Exit {
        /// The `terminer` keyword token
        token: Token,
        /// Exit code expression, always the Integer variant
        value: Expression,
    },
    /// Blank line marker
    Eof(Token),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Var { name, value, .. } => write!(f, "Var<{}, {}>", name.text, value),
            Statement::Exit { value, .. } => write!(f, "Exit<{}>", value),
            Statement::Eof(_) => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> Expression {
        Expression::Integer(Token::new(TokenKind::Integer, text, 1, 1))
    }

    #[test]
    fn test_numeric_capability() {
        assert!(int("1").is_numeric());
        assert!(Expression::Float(Token::new(TokenKind::Float, "1.5", 1, 1)).is_numeric());
        assert!(!Expression::String(Token::new(TokenKind::String, "a", 1, 1)).is_numeric());
        assert!(!Expression::Char(Token::new(TokenKind::Char, "a", 1, 1)).is_numeric());

        let operation = Expression::Operation {
            operator: Token::bare(TokenKind::Plus, 1, 3),
            left: Box::new(int("1")),
            right: Box::new(int("2")),
        };
        assert!(!operation.is_numeric());
    }

    #[test]
    fn test_display() {
        let statement = Statement::Var {
            name: Token::new(TokenKind::Identifier, "age", 1, 5),
            value: Expression::Operation {
                operator: Token::bare(TokenKind::Plus, 1, 12),
                left: Box::new(int("10")),
                right: Box::new(int("1")),
            },
            declared_type: EType::Null,
        };
        assert_eq!(statement.to_string(), "Var<age, Oper<Expr<10> + Expr<1>>>");
    }

    #[test]
    fn test_operation_token_is_the_operator() {
        let operation = Expression::Operation {
            operator: Token::bare(TokenKind::Multiply, 2, 8),
            left: Box::new(int("3")),
            right: Box::new(int("4")),
        };
        assert_eq!(operation.token().kind, TokenKind::Multiply);
        assert_eq!(operation.token().format_position(), "(ligne: 2, position: 8)");
    }
}
