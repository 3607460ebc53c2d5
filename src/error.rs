//! Error types for the Avocat front end

use thiserror::Error;

/// Avocat front-end errors
///
/// Both kinds are terminal: once a scanner or parser has returned one of
/// these, every further pull on it yields the same error again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lexical or grammatical shape violation
    ///
    /// **Triggered by:** an illegal character, an unterminated string or
    /// character literal, a missing or unexpected token, an unmatched
    /// closing parenthesis, or a non-integer `terminer(...)` argument.
    #[error("Syntaxe invalide. {message} (ligne: {line}, position: {column})")]
    Syntax {
        /// Error description, in French as in the language's diagnostics
        message: String,
        /// Line number where the error occurred (1-indexed)
        line: u32,
        /// Column number where the error occurred (1-indexed)
        column: u32,
    },

    /// Arithmetic misuse detected while parsing an operator
    ///
    /// **Triggered by:** a missing right operand after `+`, `-` or `*`, or
    /// a right operand that is not numeric.
    #[error("Opération invalide. {message} (ligne: {line}, position: {column})")]
    Operation {
        /// Error description
        message: String,
        /// Line number where the error occurred (1-indexed)
        line: u32,
        /// Column number where the error occurred (1-indexed)
        column: u32,
    },
}

impl Error {
    /// Creates a syntax error at the given source position
    pub fn syntax(message: impl Into<String>, line: u32, column: u32) -> Self {
        Error::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// Creates an operation error at the given source position
    pub fn operation(message: impl Into<String>, line: u32, column: u32) -> Self {
        Error::Operation {
            message: message.into(),
            line,
            column,
        }
    }

    /// Source position carried by the error
    pub fn position(&self) -> (u32, u32) {
        match self {
            Error::Syntax { line, column, .. } | Error::Operation { line, column, .. } => {
                (*line, *column)
            }
        }
    }
}

/// Result type for Avocat front-end operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = Error::syntax("'=' attendu.", 2, 7);
        assert_eq!(
            err.to_string(),
            "Syntaxe invalide. '=' attendu. (ligne: 2, position: 7)"
        );
    }

    #[test]
    fn test_operation_error_display() {
        let err = Error::operation("Un nombre est attendu.", 1, 12);
        assert_eq!(
            err.to_string(),
            "Opération invalide. Un nombre est attendu. (ligne: 1, position: 12)"
        );
    }

    #[test]
    fn test_position() {
        assert_eq!(Error::syntax("x", 3, 4).position(), (3, 4));
    }
}
