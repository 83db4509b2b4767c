use super::{Command, CommandError, Outcome, Streams};
use crate::core::state::ShellContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        _ctx: &mut ShellContext,
        streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError> {
        writeln!(streams.out, "{}", args.join(" "))?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn echo(args: &[&str]) -> String {
        let mut ctx = ShellContext::new(PathBuf::from("/"), Vec::new(), None);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let outcome = EchoCommand
            .execute(
                &args,
                &mut ctx,
                &mut Streams {
                    out: &mut out,
                    err: &mut err,
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert!(err.is_empty());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_echo_joins_with_single_space() {
        assert_eq!(echo(&["hello", "world"]), "hello world\n");
        assert_eq!(echo(&["a  b", "c"]), "a  b c\n");
    }

    #[test]
    fn test_echo_without_arguments() {
        assert_eq!(echo(&[]), "\n");
    }
}
