use super::{Builtin, Command, CommandError, Outcome, Streams};
use crate::core::state::ShellContext;
use crate::path::ExecutableResolver;

/// Reports how each name would be run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCommand {
    resolver: ExecutableResolver,
}

impl TypeCommand {
    pub fn new() -> Self {
        Self {
            resolver: ExecutableResolver::new(),
        }
    }
}

impl Command for TypeCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError> {
        for name in args {
            if Builtin::from_name(name).is_some() {
                writeln!(streams.out, "{} is a shell builtin", name)?;
            } else if let Some(path) = self.resolver.resolve(name, ctx) {
                writeln!(streams.out, "{} is {}", name, path.display())?;
            } else {
                writeln!(streams.out, "{}: not found", name)?;
            }
        }
        Ok(Outcome::Continue)
    }
}
