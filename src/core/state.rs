use std::env;
use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Session state shared by every command the shell runs.
///
/// The working directory lives here rather than in the process, so `cd` only
/// ever changes this value and children are spawned inside it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellContext {
    current_dir: PathBuf,
    search_path: Vec<PathBuf>,
    home: Option<PathBuf>,
}

impl ShellContext {
    pub fn new(current_dir: PathBuf, search_path: Vec<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            current_dir,
            search_path,
            home,
        }
    }

    /// Snapshot of the hosting process: its cwd, `PATH` and `HOME`.
    pub fn from_env() -> Result<Self, io::Error> {
        let current_dir = env::current_dir()?;
        let search_path = env::var_os("PATH")
            .map(|path| split_search_path(&path))
            .unwrap_or_default();
        let home = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);

        Ok(Self::new(current_dir, search_path, home))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    /// Anchors `path` at the current directory and folds `.` and `..` lexically.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        normalize(&self.current_dir.join(path))
    }
}

/// Splits a `PATH`-style value, dropping empty entries.
pub fn split_search_path(value: &OsStr) -> Vec<PathBuf> {
    env::split_paths(value)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect()
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
