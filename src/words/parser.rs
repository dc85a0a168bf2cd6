//! Move parsing: extracting a candidate word from raw action text.
//!
//! Players wrap their word in square brackets, e.g. `"I'll play [apple]"`.
//! This is the only point where malformed input is distinguished from a
//! well-formed but rule-violating word.

/// Extract the first bracket-delimited word token from raw action text.
///
/// A token is one or more word characters (ASCII alphanumerics or `_`)
/// enclosed in `[...]`. The token is returned lowercased. Returns `None`
/// if no such token exists.
///
/// ## Example
///
/// ```
/// use word_duel::words::extract_word;
///
/// assert_eq!(extract_word("I'll play [Apple]!"), Some("apple".to_string()));
/// assert_eq!(extract_word("no brackets here"), None);
/// ```
#[must_use]
pub fn extract_word(raw: &str) -> Option<String> {
    let mut rest = raw;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let token_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if token_len > 0 && after.as_bytes().get(token_len) == Some(&b']') {
            return Some(after[..token_len].to_ascii_lowercase());
        }
        // No viable token at this bracket; keep scanning after it.
        rest = after;
    }
    None
}
