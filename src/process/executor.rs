use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use super::ProcessError;

/// Runs external programs in the foreground.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `program` and blocks until it exits.
    ///
    /// The child sees `name` as its `argv[0]`, inherits the shell's standard
    /// streams and starts in `current_dir`. Its exit status is handed back for
    /// logging only.
    pub fn run(
        &self,
        program: &Path,
        name: &str,
        args: &[String],
        current_dir: &Path,
    ) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(program);
        command
            .arg0(name)
            .args(args)
            .current_dir(current_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|source| ProcessError::Spawn {
            name: name.to_string(),
            source,
        })?;
        debug!("spawned {} as pid {}", program.display(), child.id());

        let status = child.wait().map_err(|source| ProcessError::Wait {
            name: name.to_string(),
            source,
        })?;
        debug!("{} exited with {}", name, status);
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_run_reports_status() {
        let executor = ProcessExecutor::new();
        let status = executor
            .run(
                Path::new("/bin/sh"),
                "sh",
                &["-c".to_string(), "exit 3".to_string()],
                &env::temp_dir(),
            )
            .unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_run_uses_given_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let executor = ProcessExecutor::new();
        let status = executor
            .run(
                Path::new("/bin/sh"),
                "sh",
                &["-c".to_string(), "test -f marker".to_string()],
                dir.path(),
            )
            .unwrap();
        assert!(!status.success());

        std::fs::write(dir.path().join("marker"), "").unwrap();
        let status = executor
            .run(
                Path::new("/bin/sh"),
                "sh",
                &["-c".to_string(), "test -f marker".to_string()],
                dir.path(),
            )
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_spawn_failure() {
        let executor = ProcessExecutor::new();
        let result = executor.run(
            Path::new("/nonexistent/program"),
            "program",
            &[],
            &env::temp_dir(),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
        assert!(err.to_string().starts_with("program: failed to execute"));
    }
}
