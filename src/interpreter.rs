use crate::PROGRAM;
use crate::builtin::{self, BUILTINS, Builtin};
use crate::command::{Context, Continuation};
use crate::external;
use crate::input::LineSource;
use crate::tokenizer::split_line;
use anyhow::Result;
use log::{debug, warn};
use std::io::{self, Write};
use std::ops::ControlFlow;

/// A minimal line-at-a-time interpreter that runs builtins and external programs.
///
/// The interpreter owns an immutable table of [`Builtin`]s and the streams builtins
/// write to. External programs always inherit the process's own standard streams.
///
/// Example
/// ```
/// use flsh::Interpreter;
/// let mut sh = Interpreter::default();
/// assert!(sh.execute(&["help"]).is_continue());
/// assert!(sh.execute(&["exit"]).is_break());
/// ```
pub struct Interpreter {
    builtins: &'static [Builtin],
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl Interpreter {
    /// Create an interpreter with a custom builtin table and output streams.
    pub fn new(
        builtins: &'static [Builtin],
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            builtins,
            stdout,
            stderr,
        }
    }

    /// Run one already tokenized command.
    ///
    /// An empty vector does nothing. A builtin's result is returned as is; external
    /// commands always continue, whatever their exit status. Errors are printed to
    /// standard error and never stop the loop.
    pub fn execute(&mut self, args: &[&str]) -> Continuation {
        let Some(name) = args.first() else {
            return ControlFlow::Continue(());
        };

        let builtins = self.builtins;
        if let Some(builtin) = builtin::lookup(builtins, name) {
            debug!("running builtin {name}");
            let mut ctx = Context {
                stdout: self.stdout.as_mut(),
                builtins,
            };
            return match (builtin.handler)(args, &mut ctx) {
                Ok(flow) => flow,
                Err(err) => {
                    self.report(&err);
                    ControlFlow::Continue(())
                }
            };
        }

        // Keep our own output ahead of whatever the child prints.
        if let Err(err) = self.stdout.flush() {
            warn!("failed to flush output before launching {name}: {err}");
        }
        if let Err(err) = external::launch(args) {
            self.report(&err);
        }
        ControlFlow::Continue(())
    }

    /// Split one line and run it.
    ///
    /// Only fails when the argument vector cannot be allocated.
    pub fn run_line(&mut self, line: &str) -> Result<Continuation> {
        let args = split_line(line)?;
        debug!("tokens: {args:?}");
        Ok(self.execute(&args))
    }

    /// Read, split and run lines until `exit` or end of input.
    ///
    /// Errors returned from here are fatal: the input could not be read or a buffer
    /// could not grow.
    pub fn repl(&mut self, source: &mut dyn LineSource, prompt: &str) -> Result<()> {
        while let Some(line) = source.read_line(prompt)? {
            if self.run_line(&line)?.is_break() {
                return Ok(());
            }
        }
        debug!("end of input");
        Ok(())
    }

    fn report(&mut self, err: &anyhow::Error) {
        warn!("{err:#}");
        let _ = writeln!(self.stderr, "{PROGRAM}: {err:#}");
        let _ = self.stderr.flush();
    }
}

impl Default for Interpreter {
    /// An interpreter with the standard builtins (`cd`, `help`, `exit`) writing to the
    /// process's standard output and standard error.
    fn default() -> Self {
        Self::new(BUILTINS, Box::new(io::stdout()), Box::new(io::stderr()))
    }
}
