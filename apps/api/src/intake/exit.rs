//! Exit detection — substring match against a fixed keyword set.

/// Keywords that end the conversation. Matched as substrings, so "ending" hits "end".
pub const EXIT_KEYWORDS: &[&str] = &["quit", "exit", "stop", "bye", "end"];

/// Returns true iff the lowercased input contains any exit keyword.
pub fn is_exit_request(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    let lowered = input.to_lowercase();
    EXIT_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_triggers_exit() {
        for kw in EXIT_KEYWORDS {
            assert!(is_exit_request(kw), "'{kw}' should trigger exit");
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(is_exit_request("I'd like to END this"));
        assert!(is_exit_request("Goodbye!"));
    }

    #[test]
    fn test_substring_matches_count() {
        assert!(is_exit_request("bartender"));
        assert!(is_exit_request("pretend"));
        assert!(is_exit_request("I am ending my search"));
    }

    #[test]
    fn test_text_without_keywords_does_not_exit() {
        assert!(!is_exit_request("pretty"));
        assert!(!is_exit_request("hello"));
        assert!(!is_exit_request("Tech stack: Python, Django"));
        assert!(!is_exit_request("My name is Jane Doe"));
    }

    #[test]
    fn test_empty_input_does_not_exit() {
        assert!(!is_exit_request(""));
    }
}
