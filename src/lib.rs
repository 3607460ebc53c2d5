//! # Avocat
//!
//! Lexer and recursive-descent parser for Avocat, a minimal teaching
//! language with French keywords.
//!
//! The front end turns raw source text into a validated, ordered sequence
//! of statement nodes, failing fast with positioned diagnostics on any
//! malformed input. There is no semantic analysis, no operator precedence
//! and no error recovery: the first failure terminates the parse.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Statements
//! ```
//!
//! Both producers are lazy, pull-based and single-threaded: the scanner
//! yields one token per pull and the parser drives exactly one statement's
//! worth of tokens per pull. Once either has failed, every further pull
//! returns the same terminal error.
//!
//! ## Quick start
//!
//! ```rust
//! use avocat::{Parser, Scanner, Statement};
//!
//! # fn main() -> avocat::Result<()> {
//! let source = "dec age = 10 + 1\nterminer(0)\n";
//!
//! let scanner = Scanner::new(source);
//! let mut parser = Parser::new(scanner);
//! let statements = parser.parse()?;
//!
//! assert_eq!(statements.len(), 2);
//! assert!(matches!(statements[0], Statement::Var { .. }));
//! assert!(matches!(statements[1], Statement::Exit { .. }));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language overview
//!
//! - `dec nom = "Sow"` declares a variable, with an optional type
//!   annotation: `dec a: entier = 1` (`entier`, `flottant`, `chaine`,
//!   `caractere`).
//! - `terminer(0)` exits the program; the argument must be an integer
//!   literal.
//! - Arithmetic uses `+`, `-` and `*` with no precedence: operations nest
//!   to the right, so `1 + 2 * 3` parses as `1 + (2 * 3)`.
//! - `#` starts a comment running to the end of the line.
//!
//! ## Error handling
//!
//! All failures are [`Error::Syntax`] or [`Error::Operation`], both carrying
//! a French message and the offending `(ligne, position)`:
//!
//! ```rust
//! use avocat::{Error, Parser, Scanner};
//!
//! let mut parser = Parser::new(Scanner::new("dec age == 18"));
//! let err = parser.parse().unwrap_err();
//! assert!(matches!(err, Error::Syntax { line: 1, .. }));
//! ```

/// Version of the Avocat front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{EType, Expression, Parser, Statement};
