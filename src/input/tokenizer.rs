use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    SingleQuoted,
    DoubleQuoted,
}

/// Characters a backslash may escape inside double quotes.
const DOUBLE_QUOTE_ESCAPES: [char; 4] = ['"', '\\', '$', '`'];

/// Splits a raw input line into argument strings.
///
/// Whitespace outside quotes separates words, single quotes are literal,
/// double quotes keep whitespace and honour a small set of backslash escapes.
/// Quoted and unquoted segments that touch are joined into one word.
pub fn tokenize(line: &str) -> Result<Vec<String>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Tracks `''` so an empty quoted segment still yields a word.
    let mut in_word = false;
    let mut state = State::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Unquoted => match c {
                ' ' | '\t' => {
                    if in_word {
                        tokens.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                '\'' => {
                    state = State::SingleQuoted;
                    in_word = true;
                }
                '"' => {
                    state = State::DoubleQuoted;
                    in_word = true;
                }
                '\\' => {
                    current.push(chars.next().unwrap_or('\\'));
                    in_word = true;
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
            State::SingleQuoted => match c {
                '\'' => state = State::Unquoted,
                _ => current.push(c),
            },
            State::DoubleQuoted => match c {
                '"' => state = State::Unquoted,
                '\\' => match chars.peek() {
                    Some(&next) if DOUBLE_QUOTE_ESCAPES.contains(&next) => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                },
                _ => current.push(c),
            },
        }
    }

    match state {
        State::SingleQuoted => return Err(SyntaxError::UnterminatedQuote('\'')),
        State::DoubleQuoted => return Err(SyntaxError::UnterminatedQuote('"')),
        State::Unquoted => {}
    }

    if in_word {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(words("echo  hello   world"), vec!["echo", "hello", "world"]);
        assert_eq!(words("  \techo\t hi  "), vec!["echo", "hi"]);
    }

    #[test]
    fn test_blank_lines() {
        assert!(words("").is_empty());
        assert!(words(" \t  ").is_empty());
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(words("echo 'a  b'"), vec!["echo", "a  b"]);
        assert_eq!(words(r#"echo 'a\nb \"c\"'"#), vec!["echo", r#"a\nb \"c\""#]);
    }

    #[test]
    fn test_adjacent_segments_concatenate() {
        assert_eq!(words("a'b'c"), vec!["abc"]);
        assert_eq!(words(r#"'one'"two"three"#), vec!["onetwothree"]);
        assert_eq!(words("echo 'hello''world'"), vec!["echo", "helloworld"]);
    }

    #[test]
    fn test_double_quote_escapes() {
        assert_eq!(words(r#"echo "say \"hi\"""#), vec!["echo", r#"say "hi""#]);
        assert_eq!(words(r#"echo "back\\slash""#), vec!["echo", r"back\slash"]);
        assert_eq!(words(r#"echo "keep\n""#), vec!["echo", r"keep\n"]);
        assert_eq!(words(r#"echo "it's  fine""#), vec!["echo", "it's  fine"]);
    }

    #[test]
    fn test_unquoted_backslash() {
        assert_eq!(words(r"echo a\ b"), vec!["echo", "a b"]);
        assert_eq!(words(r"echo \'x\'"), vec!["echo", "'x'"]);
        assert_eq!(words(r"echo end\"), vec!["echo", r"end\"]);
    }

    #[test]
    fn test_empty_quotes_make_a_word() {
        assert_eq!(words("echo '' \"\""), vec!["echo", "", ""]);
    }

    #[test]
    fn test_unterminated_quotes() {
        assert_eq!(
            tokenize("echo 'oops"),
            Err(SyntaxError::UnterminatedQuote('\''))
        );
        assert_eq!(
            tokenize("echo \"oops"),
            Err(SyntaxError::UnterminatedQuote('"'))
        );
        assert_eq!(
            SyntaxError::UnterminatedQuote('\'').to_string(),
            "unterminated ' quote"
        );
    }
}
