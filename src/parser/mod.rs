//! Avocat parser module
//!
//! Consumes the lexer's token stream and produces statements by recursive
//! descent, one statement per pull.

mod ast;
mod parser;

pub use ast::{EType, Expression, Statement};
pub use parser::Parser;
