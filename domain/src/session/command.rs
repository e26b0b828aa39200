//! User commands accepted by a session

/// A command issued against a ready session
///
/// `Ask` carries the raw question text; validation happens at dispatch so
/// an empty question is rejected with a user-visible message rather than
/// at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Summarize,
    Ask(String),
    Exit,
}

impl Command {
    /// Parse a line of user input.
    ///
    /// Accepts the menu numbers (`1`, `2`, `3`) as well as words. Anything
    /// after `ask` is taken as the question. Returns `None` for unrecognized
    /// input.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (head, rest) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input, ""),
        };

        match head.to_lowercase().as_str() {
            "1" | "s" | "summarize" | "summarise" | "summary" if rest.is_empty() => {
                Some(Command::Summarize)
            }
            "2" | "a" | "ask" => Some(Command::Ask(rest.to_string())),
            "3" | "q" | "exit" | "quit" if rest.is_empty() => Some(Command::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words_and_numbers() {
        assert_eq!(Command::parse("summarize"), Some(Command::Summarize));
        assert_eq!(Command::parse("1"), Some(Command::Summarize));
        assert_eq!(Command::parse(" EXIT "), Some(Command::Exit));
        assert_eq!(Command::parse("3"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_ask_with_inline_question() {
        assert_eq!(
            Command::parse("ask What is the CGPA?"),
            Some(Command::Ask("What is the CGPA?".to_string()))
        );
        assert_eq!(Command::parse("2"), Some(Command::Ask(String::new())));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("translate"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("exit now"), None);
    }
}
