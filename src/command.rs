use crate::builtin::Builtin;
use anyhow::Result;
use std::io::Write;
use std::ops::ControlFlow;

/// Conventional process exit code of an external command.
///
/// 0 means success. A child killed by signal `n` is reported as `128 + n`, the way
/// POSIX shells do it.
pub type ExitCode = i32;

/// Whether the interactive loop should ask for another command.
///
/// `Continue(())` keeps the loop going; `Break(())` stops it.
pub type Continuation = ControlFlow<()>;

/// What a builtin handler gets to work with besides its arguments.
pub struct Context<'a> {
    /// Where the command writes its regular output.
    pub stdout: &'a mut dyn Write,
    /// The table the command was found in.
    pub builtins: &'a [Builtin],
}

/// Signature of every builtin command.
///
/// `args[0]` is the command name itself. Errors are reported by the caller, which
/// then keeps the loop running.
pub type Handler = fn(args: &[&str], ctx: &mut Context<'_>) -> Result<Continuation>;
