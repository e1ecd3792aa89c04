//! Split an input line into words.
//!
//! Whitespace separates words. Single quotes keep everything literally,
//! double quotes allow `\"` and `\\` escapes, and a backslash outside quotes
//! escapes the next character. `'{"a": 1}'` therefore stays one word.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),

    #[error("trailing backslash")]
    TrailingEscape,
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Plain,
    Single,
    Double,
}

pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Distinguishes an empty quoted word from no word at all.
    let mut in_word = false;
    let mut state = State::Plain;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Plain => match c {
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => {
                    let next = chars.next().ok_or(TokenizeError::TrailingEscape)?;
                    current.push(next);
                    in_word = true;
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
            State::Single => match c {
                '\'' => state = State::Plain,
                c => current.push(c),
            },
            State::Double => match c {
                '"' => state = State::Plain,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => return Err(TokenizeError::UnterminatedQuote('"')),
                },
                c => current.push(c),
            },
        }
    }

    match state {
        State::Single => Err(TokenizeError::UnterminatedQuote('\'')),
        State::Double => Err(TokenizeError::UnterminatedQuote('"')),
        State::Plain => {
            if in_word {
                words.push(current);
            }
            Ok(words)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(words("  index   get\tmovies "), vec!["index", "get", "movies"]);
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_single_quotes_keep_json() {
        assert_eq!(
            words(r#"index settings update synonyms movies '{"car": ["auto"]}'"#),
            vec![
                "index",
                "settings",
                "update",
                "synonyms",
                "movies",
                r#"{"car": ["auto"]}"#
            ]
        );
    }

    #[test]
    fn test_double_quotes_and_escapes() {
        assert_eq!(
            words(r#"key update abc --description "my \"ci\" key""#),
            vec!["key", "update", "abc", "--description", r#"my "ci" key"#]
        );
        assert_eq!(words(r"search movies star\ wars"), vec!["search", "movies", "star wars"]);
    }

    #[test]
    fn test_adjacent_quotes_join() {
        assert_eq!(words(r#"a'b c'"d""#), vec!["ab cd"]);
        assert_eq!(words(r#"search movies """#), vec!["search", "movies", ""]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            tokenize("index get 'movies"),
            Err(TokenizeError::UnterminatedQuote('\''))
        );
        assert_eq!(
            tokenize(r#"index get "movies"#),
            Err(TokenizeError::UnterminatedQuote('"'))
        );
        assert_eq!(tokenize(r"index get \"), Err(TokenizeError::TrailingEscape));
    }
}
