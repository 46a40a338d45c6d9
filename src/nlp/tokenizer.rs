//! Word tokenization
//!
//! A token is a maximal run of ASCII word characters (`[A-Za-z0-9_]`); every
//! other character is a separator. This matches the tokenization every
//! consumer of this crate shares, and it scopes scoring to Latin-script
//! words: accented and non-Latin characters act as separators.
//!
//! Iteration yields borrowed slices of the input; no rewritten copy of the
//! text is made, so a pass over a multi-megabyte document stays linear in
//! time and constant in extra memory.

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Iterate the word tokens of `text` in document order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

/// Count the word tokens of `text`.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let tokens: Vec<&str> = words("Hello, world! This is a test.").collect();
        assert_eq!(tokens, vec!["Hello", "world", "This", "is", "a", "test"]);
    }

    #[test]
    fn test_underscores_and_digits_join_tokens() {
        let tokens: Vec<&str> = words("snake_case v2 foo-bar").collect();
        assert_eq!(tokens, vec!["snake_case", "v2", "foo", "bar"]);
    }

    #[test]
    fn test_non_ascii_separates() {
        // Accented characters are separators, not word characters.
        let tokens: Vec<&str> = words("café au lait").collect();
        assert_eq!(tokens, vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three"), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("...!!!"), 0);
    }
}
