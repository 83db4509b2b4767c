use super::{Command, CommandError, Outcome, Streams};
use crate::core::state::ShellContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut ShellContext,
        streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError> {
        writeln!(streams.out, "{}", ctx.current_dir().display())?;
        Ok(Outcome::Continue)
    }
}
