use std::path::{Path, PathBuf};

use log::LevelFilter;

use crate::flags::Flags;

pub const HISTORY_FILE_NAME: &str = ".brook_history";
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Runtime settings derived from the command line and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    pub quiet: bool,
    pub debug: bool,
}

impl Config {
    pub fn new(flags: &Flags, home: Option<&Path>) -> Self {
        let history_file = if flags.no_history {
            None
        } else {
            home.map(|home| home.join(HISTORY_FILE_NAME))
        };

        Config {
            history_file,
            history_size: DEFAULT_HISTORY_SIZE,
            quiet: flags.quiet,
            debug: flags.debug,
        }
    }

    /// Level forced by flags; `None` leaves `RUST_LOG` in charge.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.debug {
            Some(LevelFilter::Debug)
        } else if self.quiet {
            Some(LevelFilter::Error)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_under_home() {
        let config = Config::new(&Flags::default(), Some(Path::new("/home/testuser")));
        assert_eq!(
            config.history_file,
            Some(PathBuf::from("/home/testuser/.brook_history"))
        );
        assert_eq!(config.history_size, DEFAULT_HISTORY_SIZE);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_history_disabled() {
        let flags = Flags {
            no_history: true,
            ..Flags::default()
        };
        assert_eq!(Config::new(&flags, Some(Path::new("/home/x"))).history_file, None);
        assert_eq!(Config::new(&Flags::default(), None).history_file, None);
    }

    #[test]
    fn test_log_level() {
        let flags = Flags {
            quiet: true,
            debug: true,
            ..Flags::default()
        };
        assert_eq!(Config::new(&flags, None).log_level(), Some(LevelFilter::Debug));

        let flags = Flags {
            quiet: true,
            ..Flags::default()
        };
        assert_eq!(Config::new(&flags, None).log_level(), Some(LevelFilter::Error));
    }
}
