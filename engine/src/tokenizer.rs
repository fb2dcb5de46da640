use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s").expect("valid regex");
}

/// Split `text` on single whitespace characters.
///
/// Input with no whitespace at all comes back as one token, so an empty
/// document yields a single empty-string token and still occupies a slot in
/// the indexes. Consecutive or leading whitespace produces empty-string
/// tokens in place; trailing empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    if !WHITESPACE.is_match(text) {
        return vec![text.to_owned()];
    }
    let mut tokens: Vec<String> = WHITESPACE.split(text).map(str::to_owned).collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        let tokens = tokenize("the lazy brown dog");
        assert_eq!(tokens, vec!["the", "lazy", "brown", "dog"]);
    }

    #[test]
    fn keeps_duplicate_tokens() {
        let tokens = tokenize("the brown fox jumped over the brown dog");
        assert_eq!(tokens.iter().filter(|t| *t == "brown").count(), 2);
        assert_eq!(tokens.len(), 8);
    }

    #[test]
    fn empty_input_yields_one_empty_token() {
        assert_eq!(tokenize(""), vec![String::new()]);
    }

    #[test]
    fn consecutive_whitespace_yields_empty_tokens_in_place() {
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenize(" a"), vec!["", "a"]);
    }

    #[test]
    fn trailing_whitespace_is_dropped() {
        assert_eq!(tokenize("a b  "), vec!["a", "b"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn splits_on_any_whitespace_character() {
        assert_eq!(tokenize("a\tb\nc"), vec!["a", "b", "c"]);
    }
}
