//! Chat command decoding
//!
//! Chat lines starting with `!` carry a command name followed by optional
//! arguments. Only the name reaches the overlay.

/// Prefix that marks a chat line as a command
pub const COMMAND_PREFIX: char = '!';

/// Extract the lowercased command name from a chat line
///
/// `"!Welcome now"` yields `Some("welcome")`. Plain messages and a bare `!`
/// yield `None`.
pub fn decode(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(COMMAND_PREFIX)?;
    let name = rest.split_whitespace().next()?;
    Some(name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_command() {
        assert_eq!(decode("!welcome"), Some("welcome".to_string()));
        assert_eq!(decode("  !WELCOME  "), Some("welcome".to_string()));
        assert_eq!(decode("!welcome to the stream"), Some("welcome".to_string()));
    }

    #[test]
    fn test_plain_messages_are_ignored() {
        assert_eq!(decode("welcome"), None);
        assert_eq!(decode("hello !welcome"), None);
        assert_eq!(decode(""), None);
    }

    #[test]
    fn test_bare_prefix_is_ignored() {
        assert_eq!(decode("!"), None);
        assert_eq!(decode("!   "), None);
    }
}
