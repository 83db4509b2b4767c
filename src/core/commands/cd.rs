use std::fs;
use std::io;

use log::debug;
use thiserror::Error;

use super::{Command, CommandError, Outcome, Streams};
use crate::core::state::ShellContext;
use crate::path::{self, PathExpander};

#[derive(Debug, Error)]
pub enum CdError {
    #[error("cd: {0}: No such file or directory")]
    NoSuchFile(String),
    #[error("cd: {0}: Permission denied")]
    PermissionDenied(String),
    #[error("cd: {path}: {reason}")]
    Other { path: String, reason: String },
    #[error("cd: HOME not set")]
    HomeNotSet,
    #[error("cd: too many arguments")]
    TooManyArguments,
}

impl CdError {
    fn from_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CdError::NoSuchFile(path.to_string()),
            io::ErrorKind::PermissionDenied => CdError::PermissionDenied(path.to_string()),
            _ => CdError::Other {
                path: path.to_string(),
                reason: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        _streams: &mut Streams<'_>,
    ) -> Result<Outcome, CommandError> {
        if args.len() > 1 {
            return Err(CdError::TooManyArguments.into());
        }

        let path_str = args.first().map(String::as_str).unwrap_or("~");
        let target = self
            .path_expander
            .expand(path_str, ctx)
            .map_err(|_| CdError::HomeNotSet)?;

        let metadata = fs::metadata(&target).map_err(|e| CdError::from_io(path_str, e))?;
        if !metadata.is_dir() {
            return Err(CdError::Other {
                path: path_str.to_string(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }
        if !path::access(&target, libc::X_OK) {
            return Err(CdError::PermissionDenied(path_str.to_string()).into());
        }

        debug!(
            "cd {} -> {}",
            ctx.current_dir().display(),
            target.display()
        );
        ctx.set_current_dir(target);
        Ok(Outcome::Continue)
    }
}
