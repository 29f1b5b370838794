//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::fmt::Write as _;

use jutos_ir::LineIndex;

use super::read_file;
use crate::reporting::report;
use crate::{produce_ast, tokenize, ParseError, Problem};

/// Failure of `jutos parse`.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error(transparent)]
    Problem(#[from] Problem),
    #[error("cannot render syntax tree as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The syntax tree of `source` as pretty-printed JSON.
pub fn parse_source(source: &str) -> Result<String, DumpError> {
    let program = produce_ast(source).map_err(Problem::from)?;
    to_json(&program)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, DumpError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per token: category, lexeme, `line:column`.
pub fn lex_source(source: &str) -> Result<String, Problem> {
    let lines = LineIndex::new(source);
    let mut out = String::new();
    for token in tokenize(source) {
        let token = token.map_err(ParseError::from)?;
        let position = lines.position(token.span.start);
        let _ = writeln!(
            out,
            "{:<11} {:<16} {position}",
            token.category().as_str(),
            token.lexeme
        );
    }
    Ok(out)
}

/// Parse a file and print its syntax tree as JSON.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    match parse_source(&source) {
        Ok(json) => println!("{json}"),
        Err(DumpError::Problem(problem)) => {
            report(&problem, path, &source);
            std::process::exit(1);
        }
        Err(err @ DumpError::Json(_)) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Lex a file and print its token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    match lex_source(&source) {
        Ok(listing) => print!("{listing}"),
        Err(problem) => {
            report(&problem, path, &source);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn unserializable_tree_is_an_error() {
        let map: BTreeMap<(u8, u8), u8> = BTreeMap::from([((1, 2), 3)]);
        let err = to_json(&map).unwrap_err();
        assert!(matches!(err, DumpError::Json(_)));
        assert!(err.to_string().starts_with("cannot render syntax tree as JSON"));
    }

    #[test]
    fn parse_failure_keeps_its_problem() {
        match parse_source("let = 1;") {
            Err(DumpError::Problem(problem)) => assert_eq!(problem.phase(), "syntax error"),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }
}
