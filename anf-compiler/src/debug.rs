//! Debug-mode collaborator of the compiler.
//!
//! Messages go through the `log` facade under the `anf::debug` target, so the
//! embedding application decides where they end up (the CLI installs
//! `env_logger`). Every debug message is also kept on an in-memory trace, and
//! failures on an error stack; both can be inspected and cleared.

use crate::error::CompileError;
use std::fmt;

/// Log target for everything emitted through [`DebugLog`].
pub const LOG_TARGET: &str = "anf::debug";

/// An entry on the error stack: a compiler error or a plain message.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorStackValue {
    Error(CompileError),
    Message(String),
}

impl fmt::Display for ErrorStackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStackValue::Error(err) => write!(f, "{err}"),
            ErrorStackValue::Message(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<CompileError> for ErrorStackValue {
    fn from(err: CompileError) -> Self {
        ErrorStackValue::Error(err)
    }
}

impl From<String> for ErrorStackValue {
    fn from(msg: String) -> Self {
        ErrorStackValue::Message(msg)
    }
}

impl From<&str> for ErrorStackValue {
    fn from(msg: &str) -> Self {
        ErrorStackValue::Message(msg.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DebugLog {
    errors: Vec<ErrorStackValue>,
    trace: Vec<String>,
}

impl DebugLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a debug message, optionally tagged with a process id, and append
    /// it to the trace.
    pub fn log(&mut self, msg: impl fmt::Display, process_id: Option<&str>) {
        let entry = format_entry(&msg, process_id);
        log::debug!(target: LOG_TARGET, "{entry}");
        self.trace.push(entry);
    }

    /// Emit an error message, optionally tagged with a process id.
    pub fn error(&self, msg: impl fmt::Display, process_id: Option<&str>) {
        log::error!(target: LOG_TARGET, "{}", format_entry(&msg, process_id));
    }

    /// Log `msg` and hand it back to the caller.
    pub fn inspect<T: fmt::Display>(&mut self, msg: T, process_id: Option<&str>) -> T {
        self.log(&msg, process_id);
        msg
    }

    /// Every message passed to [`Self::log`], oldest first, as
    /// `"{process_id} - {msg}"` when a process id was given.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// Push onto the error stack, returning the stack as it now stands.
    pub fn add_error(&mut self, error: impl Into<ErrorStackValue>) -> &[ErrorStackValue] {
        self.errors.push(error.into());
        &self.errors
    }

    pub fn errors(&self) -> &[ErrorStackValue] {
        &self.errors
    }

    pub fn number_of_errors(&self) -> usize {
        self.errors.len()
    }

    /// Copy of the error stack; empties it when `clear` is set.
    pub fn dump_errors(&mut self, clear: bool) -> Vec<ErrorStackValue> {
        if clear {
            std::mem::take(&mut self.errors)
        } else {
            self.errors.clone()
        }
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

fn format_entry(msg: &dyn fmt::Display, process_id: Option<&str>) -> String {
    match process_id {
        Some(id) => format!("{id} - {msg}"),
        None => msg.to_string(),
    }
}
