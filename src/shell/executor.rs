use std::io::Write;

use log::warn;

use crate::core::commands::{CommandError, Invocation, Outcome, Streams};
use crate::input::{tokenize, LineReader};

impl<R: LineReader, O: Write, E: Write> super::Shell<R, O, E> {
    /// Tokenizes and dispatches one line, reporting any failure.
    ///
    /// Errors never escape: they are written out and the loop carries on.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                self.report_error(&format!("brook: syntax error: {}", e));
                return Outcome::Continue;
            }
        };

        let Some(invocation) = Invocation::from_tokens(tokens) else {
            return Outcome::Continue;
        };

        let result = self.executor.execute(
            &invocation,
            &mut self.context,
            &mut Streams {
                out: &mut self.out,
                err: &mut self.err,
            },
        );

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e @ CommandError::NotFound(_)) => {
                if let Err(io_err) = writeln!(self.out, "{}", e) {
                    warn!("Couldn't write to stdout: {}", io_err);
                }
                Outcome::Continue
            }
            Err(e) => {
                self.report_error(&e.to_string());
                Outcome::Continue
            }
        };

        if let Err(e) = self.out.flush() {
            warn!("Couldn't flush stdout: {}", e);
        }
        outcome
    }

    fn report_error(&mut self, message: &str) {
        let message = match &self.highlighter {
            Some(highlighter) => highlighter.highlight_error(message),
            None => message.to_string(),
        };
        if let Err(e) = writeln!(self.err, "{}", message).and_then(|_| self.err.flush()) {
            warn!("Couldn't write to stderr: {}", e);
        }
    }
}
