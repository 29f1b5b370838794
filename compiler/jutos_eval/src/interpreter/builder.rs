//! `InterpreterBuilder` for configuring an [`Interpreter`].

use std::cell::Cell;

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Call depth limit used unless configured otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2048;

/// Builder for [`Interpreter`].
///
/// ```text
/// let handler = buffer_handler();
/// let interpreter = InterpreterBuilder::new()
///     .print_handler(handler.clone())
///     .max_call_depth(256)
///     .build();
/// ```
pub struct InterpreterBuilder {
    max_call_depth: usize,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            print_handler: None,
        }
    }

    /// Maximum number of nested user function calls before evaluation fails
    /// with `StackExhausted`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: Cell::new(0),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
