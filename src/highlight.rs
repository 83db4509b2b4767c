use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors the command word by whether it resolves, and flags in yellow.
    ///
    /// Whitespace is copied through untouched so the editor's cursor
    /// arithmetic still lines up with the rendered text.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut rest = input;
        let mut first = true;

        loop {
            let trimmed = rest.trim_start();
            result.push_str(&rest[..rest.len() - trimmed.len()]);
            rest = trimmed;
            if rest.is_empty() {
                break;
            }

            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_len];
            if first {
                let color = if is_known(word) { Color::Cyan } else { Color::Red };
                let style = Style::builder().foreground(color).bold().build();
                result.push_str(&word.style(style).to_string());
                first = false;
            } else if word.starts_with('-') {
                let style = Style::builder().foreground(Color::Yellow).build();
                result.push_str(&word.style(style).to_string());
            } else {
                result.push_str(word);
            }
            rest = &rest[word_len..];
        }

        result
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.is_enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        error.style(error_style).to_string()
    }
}
