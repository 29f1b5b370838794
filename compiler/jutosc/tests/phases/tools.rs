//! The `lex` and `parse` debug commands.

use jutosc::commands::{lex_source, parse_source, DumpError};
use pretty_assertions::assert_eq;

fn columns(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[test]
fn lex_lists_tokens_with_positions() {
    let listing = lex_source("let a = 5;\nprint(a);").unwrap();
    let lines: Vec<Vec<&str>> = listing.lines().map(columns).collect();
    assert_eq!(lines[0], vec!["keyword", "let", "1:1"]);
    assert_eq!(lines[1], vec!["identifier", "a", "1:5"]);
    assert_eq!(lines[2], vec!["operator", "=", "1:7"]);
    assert_eq!(lines[3], vec!["number", "5", "1:9"]);
    assert_eq!(lines[4], vec!["punctuation", ";", "1:10"]);
    assert_eq!(lines[5], vec!["identifier", "print", "2:1"]);
    assert_eq!(lines.last().unwrap(), &vec!["eof", "2:10"]);
}

#[test]
fn lex_reports_errors() {
    let problem = lex_source("let x = 'oops").unwrap_err();
    assert_eq!(problem.code(), "E1002");
}

#[test]
fn parse_prints_json_tree() {
    let json = parse_source("let a = 5;").unwrap();
    let tree: serde_json::Value = serde_json::from_str(&json).unwrap();
    let decl = &tree["body"][0]["kind"]["VariableDeclaration"];
    assert_eq!(decl["name"], "a");
    assert_eq!(decl["mutable"], true);
    assert_eq!(decl["init"]["kind"]["Number"], 5.0);
    assert_eq!(tree["span"]["end"], 10);
}

#[test]
fn parse_reports_errors() {
    match parse_source("fn (") {
        Err(DumpError::Problem(problem)) => assert_eq!(problem.code(), "E2001"),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}
