use std::io;
use thiserror::Error;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{name}: failed to execute: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("{name}: failed to wait for process: {source}")]
    Wait {
        name: String,
        #[source]
        source: io::Error,
    },
}
