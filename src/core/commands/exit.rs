use super::{Command, CommandError, Outcome, Streams};
use crate::core::state::ShellContext;

/// Status used when `exit` is given something that is not a number.
pub const INVALID_ARGUMENT_STATUS: i32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        _ctx: &mut ShellContext,
        streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError> {
        let Some(arg) = args.first() else {
            return Ok(Outcome::Terminate(0));
        };

        let code = match arg.parse::<i64>() {
            Ok(code) => code,
            Err(_) => {
                writeln!(streams.err, "exit: {}: numeric argument required", arg)?;
                return Ok(Outcome::Terminate(INVALID_ARGUMENT_STATUS));
            }
        };

        // The shell stays up when given more than one status.
        if args.len() > 1 {
            writeln!(streams.err, "exit: too many arguments")?;
            return Ok(Outcome::Continue);
        }

        // Statuses wrap into 0..=255 like the wait status does.
        Ok(Outcome::Terminate(code.rem_euclid(256) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn exit(args: &[&str]) -> (Outcome, String) {
        let mut ctx = ShellContext::new(PathBuf::from("/"), Vec::new(), None);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let outcome = ExitCommand
            .execute(
                &args,
                &mut ctx,
                &mut Streams {
                    out: &mut out,
                    err: &mut err,
                },
            )
            .unwrap();
        (outcome, String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_exit_command() {
        assert_eq!(exit(&[]).0, Outcome::Terminate(0));
        assert_eq!(exit(&["0"]).0, Outcome::Terminate(0));
        assert_eq!(exit(&["42"]).0, Outcome::Terminate(42));
    }

    #[test]
    fn test_exit_wraps_status() {
        assert_eq!(exit(&["256"]).0, Outcome::Terminate(0));
        assert_eq!(exit(&["-1"]).0, Outcome::Terminate(255));
    }

    #[test]
    fn test_exit_non_numeric() {
        let (outcome, err) = exit(&["soon"]);
        assert_eq!(outcome, Outcome::Terminate(INVALID_ARGUMENT_STATUS));
        assert_eq!(err, "exit: soon: numeric argument required\n");
    }

    #[test]
    fn test_exit_too_many_arguments() {
        let (outcome, err) = exit(&["1", "2"]);
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(err, "exit: too many arguments\n");

        let (outcome, _) = exit(&["x", "2"]);
        assert_eq!(outcome, Outcome::Terminate(INVALID_ARGUMENT_STATUS));
    }
}
