use std::io::{self, Write};

use log::debug;
use thiserror::Error;

mod cd;
mod echo;
mod exit;
mod pwd;
mod type_;

pub use cd::{CdCommand, CdError};
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_::TypeCommand;

use crate::core::state::ShellContext;
use crate::path::ExecutableResolver;
use crate::process::{ProcessError, ProcessExecutor};

/// What the shell loop should do after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminate(i32),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}: command not found")]
    NotFound(String),
    #[error(transparent)]
    Cd(#[from] CdError),
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The output side of a command: its standard output and error writers.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl Streams<'_> {
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// One parsed input line: the command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    name: String,
    args: Vec<String>,
}

impl Invocation {
    /// `None` for an empty token list.
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        let mut tokens = tokens.into_iter();
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError>;
}

/// Commands implemented by the shell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Builtin {
    Cd,
    Echo,
    Exit,
    Pwd,
    Type,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Cd,
        Builtin::Echo,
        Builtin::Exit,
        Builtin::Pwd,
        Builtin::Type,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "echo" => Some(Builtin::Echo),
            "exit" => Some(Builtin::Exit),
            "pwd" => Some(Builtin::Pwd),
            "type" => Some(Builtin::Type),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Echo => "echo",
            Builtin::Exit => "exit",
            Builtin::Pwd => "pwd",
            Builtin::Type => "type",
        }
    }
}

impl Command for Builtin {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError> {
        match self {
            Builtin::Cd => CdCommand::new().execute(args, ctx, streams),
            Builtin::Echo => EchoCommand.execute(args, ctx, streams),
            Builtin::Exit => ExitCommand.execute(args, ctx, streams),
            Builtin::Pwd => PwdCommand.execute(args, ctx, streams),
            Builtin::Type => TypeCommand::new().execute(args, ctx, streams),
        }
    }
}

/// Routes an invocation to a builtin or to an external program.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor {
    resolver: ExecutableResolver,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            resolver: ExecutableResolver::new(),
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(
        &self,
        invocation: &Invocation,
        ctx: &mut ShellContext,
        streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError> {
        let name = invocation.name();
        if let Some(builtin) = Builtin::from_name(name) {
            debug!("running builtin {}", name);
            return builtin.execute(invocation.args(), ctx, streams);
        }

        let program = self
            .resolver
            .resolve(name, ctx)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        // The child writes straight to the inherited descriptors.
        streams.flush()?;
        self.process_executor
            .run(&program, name, invocation.args(), ctx.current_dir())?;
        Ok(Outcome::Continue)
    }
}
