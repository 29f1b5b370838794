//! Jutos lexer.
//!
//! Turns source text into a lazy stream of [`Token`]s. Whitespace, `//` line
//! comments and `/* */` block comments are skipped. Identifiers spelled like a
//! reserved word come out as keywords.
//!
//! ```text
//! for token in jutos_lexer::tokenize("let a = 5;") {
//!     let token = token?;
//!     println!("{} {}", token.category(), token.lexeme);
//! }
//! ```

mod escape;
mod lex_error;
mod lexer;
mod raw;

pub use jutos_ir::{Token, TokenCategory, TokenKind};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;

/// Start lexing `source`.
///
/// The returned stream is lazy and single-pass; lexing the same text again
/// requires a fresh call.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lex all of `source`, stopping at the first error.
///
/// The result always ends with an `Eof` token.
pub fn lex_all(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    tokenize(source).collect()
}
