use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::commands::Builtin;
use crate::core::state::ShellContext;
use crate::highlight::SyntaxHighlighter;
use crate::path::ExecutableResolver;

/// Line-editor helper: tab completion and command highlighting.
#[derive(Clone)]
pub struct ShellHelper {
    commands: BTreeSet<String>,
    current_dir: PathBuf,
    highlighter: SyntaxHighlighter,
}

impl ShellHelper {
    pub fn new(ctx: &ShellContext) -> Self {
        let mut helper = ShellHelper {
            commands: BTreeSet::new(),
            current_dir: ctx.current_dir().to_path_buf(),
            highlighter: SyntaxHighlighter::new(),
        };
        helper.refresh_commands(ctx);
        helper
    }

    pub fn refresh_commands(&mut self, ctx: &ShellContext) {
        self.commands = ExecutableResolver::new().commands(ctx);
        self.commands
            .extend(Builtin::ALL.iter().map(|builtin| builtin.name().to_string()));
    }

    /// Keeps relative path completion in step with `cd`.
    pub fn set_current_dir(&mut self, dir: &Path) {
        if self.current_dir != dir {
            self.current_dir = dir.to_path_buf();
        }
    }

    pub fn is_command(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .range(prefix.to_string()..)
            .take_while(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }

    fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_part, file_prefix) = match incomplete.rfind('/') {
            Some(idx) => incomplete.split_at(idx + 1),
            None => ("", incomplete),
        };
        let dir_to_search = if dir_part.is_empty() {
            self.current_dir.clone()
        } else {
            self.current_dir.join(dir_part)
        };

        let Ok(entries) = fs::read_dir(&dir_to_search) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(file_prefix) {
                    return None;
                }
                // Hidden entries only when asked for.
                if name.starts_with('.') && !file_prefix.starts_with('.') {
                    return None;
                }
                let suffix = if entry.path().is_dir() { "/" } else { " " };
                Some(Pair {
                    display: format!("{}{}", name, suffix.trim()),
                    replacement: format!("{}{}{}", dir_part, name, suffix),
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Byte offset where the word under the cursor starts.
fn word_start(line: &str) -> usize {
    line.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(idx, c)| idx + c.len_utf8())
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |name| self.is_command(name)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let start = word_start(line_up_to_cursor);
        let word = &line_up_to_cursor[start..];

        if line_up_to_cursor[..start].trim().is_empty() {
            Ok((start, self.complete_command(word)))
        } else {
            Ok((start, self.complete_path(word)))
        }
    }
}
