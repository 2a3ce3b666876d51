use crate::DEFAULT_PROMPT;
use argh::FromArgs;
use std::io::{self, IsTerminal};

#[derive(FromArgs, Debug)]
/// A tiny line-at-a-time shell: builtins `cd`, `help` and `exit`, everything else
/// is run as a program.
pub struct Options {
    #[argh(option, default = "String::from(DEFAULT_PROMPT)")]
    /// text printed before each command line.
    pub prompt: String,

    #[argh(switch)]
    /// read plain lines from standard input even when it is a terminal.
    pub no_editor: bool,
}

impl Options {
    /// Use the line editor only when talking to a terminal and not told otherwise.
    pub fn use_editor(&self) -> bool {
        !self.no_editor && io::stdin().is_terminal()
    }
}
