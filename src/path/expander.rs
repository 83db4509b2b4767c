use crate::core::state::ShellContext;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("HOME not set")]
    HomeDirNotFound,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expands a leading `~` and anchors the result at the context's cwd.
    pub fn expand(&self, path: &str, ctx: &ShellContext) -> Result<PathBuf, ExpandError> {
        let expanded = if self.is_home_path(path) {
            self.expand_tilde(path, ctx.home())?
        } else {
            PathBuf::from(path)
        };
        Ok(ctx.resolve(&expanded))
    }

    fn expand_tilde(&self, path: &str, home: Option<&Path>) -> Result<PathBuf, ExpandError> {
        let home = home.ok_or(ExpandError::HomeDirNotFound)?;
        match path.strip_prefix("~/") {
            Some(rest) => Ok(home.join(rest)),
            None => Ok(home.to_path_buf()),
        }
    }

    /// `~` and `~/...` only; `~user` forms are taken literally.
    pub fn is_home_path(&self, path: &str) -> bool {
        path == "~" || path.starts_with("~/")
    }
}
