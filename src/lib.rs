//! A tiny line-at-a-time command interpreter.
//!
//! The crate reads one line at a time, splits it on whitespace and either runs one
//! of a handful of built-in commands in-process or spawns an external program and
//! waits for it. There are no pipelines, redirections, quoting or variables: one
//! line is one command.
//!
//! The main entry point is [`Interpreter`]. Lines come from a [`input::LineSource`],
//! which is either plain standard input or a `rustyline` editor when running on a
//! terminal.

mod buffer;
pub mod builtin;
pub mod command;
pub mod config;
mod external;
pub mod input;
mod interpreter;
pub mod io_adapters;
pub mod reader;
pub mod tokenizer;

pub use external::launch;
pub use interpreter::Interpreter;

/// Name used as the prefix of every diagnostic.
pub const PROGRAM: &str = "flsh";

/// Prompt printed before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

#[cfg(test)]
pub(crate) fn lock_current_dir() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
