//! Lexical analysis for Avocat
//!
//! Converts source text into a lazy stream of tokens.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
