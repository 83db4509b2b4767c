mod completer;
mod reader;
pub mod tokenizer;

pub use completer::ShellHelper;
pub use reader::{EditorReader, LineReader, ReadOutcome, StreamReader};
pub use tokenizer::{tokenize, SyntaxError};
