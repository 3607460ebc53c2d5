use anyhow::{Context, Result};

use avocat::{Parser, Scanner};

/// Driver: reads a source file, prints each parsed statement, and reports
/// the first failure.
fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: avocat <fichier source>")?;
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("impossible de lire {path}"))?;

    let scanner = Scanner::new(&source);
    for statement in Parser::new(scanner) {
        println!("{}", statement?);
    }

    Ok(())
}
