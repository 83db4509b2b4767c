use crate::core::state::ShellContext;
use log::debug;
use std::collections::BTreeSet;
use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Locates external programs by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableResolver;

impl ExecutableResolver {
    pub fn new() -> Self {
        Self
    }

    /// Returns the absolute path `name` runs as, if any.
    ///
    /// Bare names are looked up in the search path and the first directory
    /// holding an executable regular file wins. Names containing a `/` skip
    /// the search and are taken relative to the current directory.
    pub fn resolve(&self, name: &str, ctx: &ShellContext) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        if name.contains('/') {
            let candidate = ctx.resolve(Path::new(name));
            return is_executable(&candidate).then_some(candidate);
        }

        let found = ctx
            .search_path()
            .iter()
            .map(|dir| ctx.resolve(&dir.join(name)))
            .find(|candidate| is_executable(candidate));

        match &found {
            Some(path) => debug!("resolved {} to {}", name, path.display()),
            None => debug!("{} not found in search path", name),
        }
        found
    }

    /// Every executable name reachable through the search path.
    pub fn commands(&self, ctx: &ShellContext) -> BTreeSet<String> {
        let mut commands = BTreeSet::new();
        for dir in ctx.search_path() {
            let Ok(entries) = fs::read_dir(ctx.resolve(dir)) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if is_executable(&entry.path()) {
                        commands.insert(name.to_string());
                    }
                }
            }
        }
        commands
    }
}

/// A regular file (symlinks followed) the current user may execute.
pub fn is_executable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => access(path, libc::X_OK),
        _ => false,
    }
}

/// Wraps `access(2)`, which checks against the real uid and gid.
pub(crate) fn access(path: &Path, mode: libc::c_int) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}
