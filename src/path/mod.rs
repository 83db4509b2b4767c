mod expander;
mod resolver;

pub use expander::{ExpandError, PathExpander};
pub use resolver::{is_executable, ExecutableResolver};

pub(crate) use resolver::access;
