use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{debug, warn};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

use super::ShellHelper;
use crate::config::Config;
use crate::core::state::ShellContext;
use crate::error::ShellError;

/// Result of one blocking read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The user abandoned the line (Ctrl-C in the editor).
    Interrupted,
    Eof,
}

/// Where the shell gets its input lines from.
pub trait LineReader {
    /// Shows `prompt` and blocks for the next line.
    ///
    /// `out` is the shell's standard output; readers that draw their own
    /// prompt only flush it.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<ReadOutcome, ShellError>;

    /// Called after every dispatched line so the reader can follow `cd`.
    fn sync(&mut self, _ctx: &ShellContext) {}

    /// Called once when the loop stops.
    fn close(&mut self) {}
}

/// Reads plain lines from any buffered stream, writing the prompt to `out`.
pub struct StreamReader<R> {
    input: R,
}

impl<R: BufRead> StreamReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for StreamReader<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<ReadOutcome, ShellError> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ReadOutcome::Eof);
        }

        // Bytes that are not UTF-8 become U+FFFD instead of failing the read.
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(ReadOutcome::Line(line))
    }
}

/// Interactive reader backed by rustyline, with history and completion.
pub struct EditorReader {
    editor: Editor<ShellHelper, FileHistory>,
    history_file: Option<PathBuf>,
}

impl EditorReader {
    pub fn new(config: &Config, ctx: &ShellContext) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;
        editor.set_helper(Some(ShellHelper::new(ctx)));
        editor.set_auto_add_history(true);
        editor.set_max_history_size(config.history_size)?;

        if let Some(path) = &config.history_file {
            if let Err(e) = editor.load_history(path) {
                debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_file: config.history_file.clone(),
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<ReadOutcome, ShellError> {
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn sync(&mut self, ctx: &ShellContext) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_current_dir(ctx.current_dir());
        }
    }

    fn close(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!("Couldn't save history to {}: {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_reader_lines_and_eof() {
        let mut reader = StreamReader::new("first\nsecond\r\nlast".as_bytes());
        let mut out = Vec::new();

        assert_eq!(
            reader.read_line("$ ", &mut out).unwrap(),
            ReadOutcome::Line("first".to_string())
        );
        assert_eq!(
            reader.read_line("$ ", &mut out).unwrap(),
            ReadOutcome::Line("second".to_string())
        );
        assert_eq!(
            reader.read_line("$ ", &mut out).unwrap(),
            ReadOutcome::Line("last".to_string())
        );
        assert_eq!(reader.read_line("$ ", &mut out).unwrap(), ReadOutcome::Eof);
        assert_eq!(String::from_utf8(out).unwrap(), "$ $ $ $ ");
    }

    #[test]
    fn test_stream_reader_blank_line() {
        let mut reader = StreamReader::new("\n".as_bytes());
        let mut out = Vec::new();
        assert_eq!(
            reader.read_line("> ", &mut out).unwrap(),
            ReadOutcome::Line(String::new())
        );
    }

    #[test]
    fn test_stream_reader_replaces_invalid_utf8() {
        let mut reader = StreamReader::new(&b"echo \xff\nnext\n"[..]);
        let mut out = Vec::new();
        assert_eq!(
            reader.read_line("$ ", &mut out).unwrap(),
            ReadOutcome::Line("echo \u{FFFD}".to_string())
        );
        assert_eq!(
            reader.read_line("$ ", &mut out).unwrap(),
            ReadOutcome::Line("next".to_string())
        );
    }
}
