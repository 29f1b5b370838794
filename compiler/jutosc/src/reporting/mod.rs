//! Terminal rendering of [`Problem`]s with source snippets.
//!
//! Spans are byte ranges; the renderer counts characters, so spans are
//! converted before they are handed over.

use std::io;
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use jutos_ir::{LineIndex, Span};

use crate::Problem;

/// Character range covering the bytes of `span`.
fn char_range(source: &str, span: Span) -> Range<usize> {
    let count = |byte: usize| {
        source
            .get(..byte.min(source.len()))
            .map_or_else(|| source.chars().count(), |prefix| prefix.chars().count())
    };
    let range = span.to_range();
    count(range.start)..count(range.end)
}

/// Write the report for `problem` in `path` to `writer`.
pub fn write_report<W: io::Write>(
    problem: &Problem,
    path: &str,
    source: &str,
    color: bool,
    writer: W,
) -> io::Result<()> {
    let range = problem.span().map(|span| char_range(source, span));
    let offset = range.as_ref().map_or(0, |r| r.start);

    let mut builder = Report::build(ReportKind::Error, path, offset)
        .with_code(problem.code())
        .with_message(problem.message())
        .with_config(Config::default().with_color(color));
    if let Some(range) = range {
        builder = builder.with_label(
            Label::new((path, range))
                .with_message(problem.phase())
                .with_color(Color::Red),
        );
    }
    builder.finish().write((path, Source::from(source)), writer)
}

/// Render the report for `problem` to a string.
pub fn render(problem: &Problem, path: &str, source: &str, color: bool) -> String {
    let mut out = Vec::new();
    match write_report(problem, path, source, color, &mut out) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => summary(problem, path, source),
    }
}

/// One-line form: `error[CODE]: message --> path:line:col`.
pub fn summary(problem: &Problem, path: &str, source: &str) -> String {
    let head = format!("error[{}]: {}", problem.code(), problem.message());
    match problem.span() {
        Some(span) => {
            let position = LineIndex::new(source).position(span.start);
            format!("{head} --> {path}:{position}")
        }
        None => format!("{head} --> {path}"),
    }
}

/// Print the report for `problem` to stderr, colored when stderr is a terminal.
pub fn report(problem: &Problem, path: &str, source: &str) {
    let color = io::IsTerminal::is_terminal(&io::stderr());
    if write_report(problem, path, source, color, io::stderr()).is_err() {
        eprintln!("{}", summary(problem, path, source));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
