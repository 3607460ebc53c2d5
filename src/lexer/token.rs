use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token; empty for punctuation and keywords,
    /// whose identity is fully carried by `kind`
    pub text: String,
    /// Line number where the token starts (1-indexed)
    pub line: u32,
    /// Column number where the token starts (1-indexed)
    pub column: u32,
}

impl Token {
    /// Creates a new token carrying source text
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Creates a token with no text (punctuation, keywords, newline)
    pub fn bare(kind: TokenKind, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: String::new(),
            line,
            column,
        }
    }

    /// Renders the token's position the way diagnostics do
    pub fn format_position(&self) -> String {
        format!("(ligne: {}, position: {})", self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(
                f,
                "Token<type={:?}, line={}, position={}>",
                self.kind, self.line, self.column
            )
        } else {
            write!(
                f,
                "Token<type={:?}, value={}, line={}, position={}>",
                self.kind, self.text, self.line, self.column
            )
        }
    }
}

/// All possible token types in Avocat
///
/// `SingleQuote` and `Comment` are part of the closed kind set but are never
/// emitted by the scanner: character literals are folded into `Char` tokens
/// and comments are discarded outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// `dec` keyword, declares a variable
    Var,
    /// `terminer` keyword, exits the program
    Exit,
    /// Assignment operator (=)
    Equal,
    /// Identifier (variable name)
    Identifier,
    /// End of a logical line
    NewLine,
    /// String literal
    String,
    /// Integer literal
    Integer,
    /// Floating-point literal
    Float,
    /// Character literal
    Char,
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Type annotation separator (:)
    TwoPoints,
    /// Single quote (')
    SingleQuote,
    /// `entier` type keyword
    TypeInteger,
    /// `chaine` type keyword
    TypeString,
    /// `flottant` type keyword
    TypeFloat,
    /// `caractere` type keyword
    TypeChar,
    /// Multiply operator (*)
    Multiply,
    /// Left parenthesis (
    OpenParen,
    /// Right parenthesis )
    CloseParen,
    /// Comment marker (#)
    Comment,
}

impl TokenKind {
    /// Looks a lexeme up in the fixed keyword table
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "dec" => Some(TokenKind::Var),
            "terminer" => Some(TokenKind::Exit),
            "entier" => Some(TokenKind::TypeInteger),
            "flottant" => Some(TokenKind::TypeFloat),
            "chaine" => Some(TokenKind::TypeString),
            "caractere" => Some(TokenKind::TypeChar),
            _ => None,
        }
    }

    /// Check if token is one of the four type annotation keywords
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::TypeInteger | TokenKind::TypeString | TokenKind::TypeFloat | TokenKind::TypeChar
        )
    }

    /// Check if token is an arithmetic operator
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus | TokenKind::Multiply)
    }
}
