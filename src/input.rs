use crate::reader::LineReader;
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Where the interactive loop gets its next line from.
pub trait LineSource {
    /// Show `prompt` and read one line.
    ///
    /// Returns `None` once input is exhausted. An empty line is `Some("")`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Plain line source: prints the prompt and reads with a [`LineReader`].
pub struct StdinSource<R, W> {
    reader: LineReader<R>,
    prompt_out: W,
}

impl<R: BufRead, W: Write> StdinSource<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self {
            reader: LineReader::new(input),
            prompt_out,
        }
    }
}

impl StdinSource<StdinLock<'static>, Stdout> {
    /// Read from the process standard input, prompting on standard output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for StdinSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let line = self.reader.read_line()?;
        if line.is_empty() && self.reader.at_eof() {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Line-editing source for terminals, with in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to set up the line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-C drops what was typed so far and prompts again.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_is_printed_before_each_read() {
        let mut prompts = Vec::new();
        let mut source = StdinSource::new(Cursor::new("help\n\n"), &mut prompts);

        assert_eq!(source.read_line("> ").unwrap().as_deref(), Some("help"));
        assert_eq!(source.read_line("> ").unwrap().as_deref(), Some(""));
        assert_eq!(source.read_line("> ").unwrap(), None);
        drop(source);

        assert_eq!(String::from_utf8(prompts).unwrap(), "> > > ");
    }

    #[test]
    fn last_line_without_newline_is_not_lost() {
        let mut source = StdinSource::new(Cursor::new("exit"), Vec::new());
        assert_eq!(source.read_line("$ ").unwrap().as_deref(), Some("exit"));
        assert_eq!(source.read_line("$ ").unwrap(), None);
    }

    #[test]
    fn whitespace_line_at_end_of_input_is_still_a_line() {
        let mut source = StdinSource::new(Cursor::new("  "), Vec::new());
        assert_eq!(source.read_line("").unwrap().as_deref(), Some("  "));
        assert_eq!(source.read_line("").unwrap(), None);
    }
}
