use std::io::Write;

use log::debug;

mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Outcome},
        state::ShellContext,
    },
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::{LineReader, ReadOutcome},
};

pub const PROMPT: &str = "$ ";

/// The read-tokenize-dispatch loop.
///
/// Generic over where lines come from and where output goes, so the same loop
/// drives an interactive terminal and in-memory test streams.
pub struct Shell<R, O, E> {
    pub(crate) reader: R,
    pub(crate) out: O,
    pub(crate) err: E,
    pub(crate) context: ShellContext,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: Option<SyntaxHighlighter>,
}

impl<R: LineReader, O: Write, E: Write> Shell<R, O, E> {
    pub fn new(reader: R, out: O, err: E, context: ShellContext) -> Self {
        Shell {
            reader,
            out,
            err,
            context,
            executor: CommandExecutor::new(),
            highlighter: None,
        }
    }

    /// Colors error messages written to the error stream.
    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Runs until `exit` or end of input and returns the exit status.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let result = self.run_loop();
        self.reader.close();
        result
    }

    fn run_loop(&mut self) -> Result<i32, ShellError> {
        loop {
            match self.reader.read_line(PROMPT, &mut self.out)? {
                ReadOutcome::Line(line) => {
                    let outcome = self.execute_line(&line);
                    self.reader.sync(&self.context);
                    if let Outcome::Terminate(code) = outcome {
                        debug!("terminating with status {}", code);
                        return Ok(code);
                    }
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    debug!("end of input");
                    return Ok(0);
                }
            }
        }
    }

    pub fn into_parts(self) -> (O, E, ShellContext) {
        (self.out, self.err, self.context)
    }
}
