//! Command handlers for the `jutos` CLI.
//!
//! Each submodule implements one family of commands. The `*_source`
//! functions return their result for callers and tests; the `*_file`
//! wrappers read a file, print, and exit non-zero on failure.

mod debug;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source, DumpError};
pub use run::{eval_inline, execute, parse_run_args, run_file, RunOptions};

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
