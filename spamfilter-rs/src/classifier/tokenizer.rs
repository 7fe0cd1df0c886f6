//! Message body tokenization

/// Split body text into tokens.
///
/// Tokens are whitespace-delimited runs of characters, kept in order with
/// empty fragments discarded. No case-folding, stemming, or punctuation
/// stripping: counts are taken over the raw words as written.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        let tokens = tokenize("hello  world\tfoo\nbar");
        assert_eq!(tokens, vec!["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_tokenize_preserves_case_and_punctuation() {
        let tokens = tokenize("Hello, World!");
        assert_eq!(tokens, vec!["Hello,", "World!"]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_order() {
        let tokens = tokenize("one two three two one");
        assert_eq!(tokens, vec!["one", "two", "three", "two", "one"]);
    }
}
