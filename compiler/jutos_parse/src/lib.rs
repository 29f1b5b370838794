//! Recursive descent parser for Jutos.
//!
//! Statements are parsed by plain recursive descent; expressions by
//! precedence climbing over the levels below (low to high):
//!
//! | level | operators | associativity |
//! |-------|-----------|---------------|
//! | assignment | `=` `+=` `-=` `*=` `/=` `%=` | right |
//! | logical or | `\|\|` | left |
//! | logical and | `&&` | left |
//! | equality | `==` `!=` | left |
//! | relational | `<` `<=` `>` `>=` | left |
//! | additive | `+` `-` | left |
//! | multiplicative | `*` `/` `%` | left |
//! | unary | `-` `!` | prefix |
//! | postfix | call `()`, member `.name`, index `[expr]` | left |
//!
//! Parsing stops at the first error; a failed parse exposes no partial tree.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use jutos_ir::{Program, Span};
use tracing::debug;

/// Parse `source` into a [`Program`].
pub fn produce_ast(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    /// Number of loops enclosing the current statement within the current
    /// function body. `break`/`continue` are only legal when non-zero.
    loop_depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
            loop_depth: 0,
        }
    }

    /// Parse a complete program, consuming the parser.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let result = self.program();
        let program = match (result, self.cursor.take_lex_error()) {
            (Err(err), Some(lex)) if err.span.start < lex.span.start => Err(err),
            (_, Some(lex)) => Err(lex.into()),
            (result, None) => result,
        }?;
        debug!(statements = program.body.len(), "parsed program");
        Ok(program)
    }

    fn program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.statement()? {
                body.push(stmt);
            }
        }
        Ok(Program::new(body, Span::new(0, self.cursor.current_span().end)))
    }

    /// Run `f` as the body of a loop.
    fn in_loop<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.loop_depth += 1;
        let result = f(self);
        self.loop_depth -= 1;
        result
    }

    /// Run `f` as a function body, where enclosing loops are out of reach.
    fn in_function<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.loop_depth, 0);
        let result = f(self);
        self.loop_depth = saved;
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
