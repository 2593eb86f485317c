//! Placeholder token shape.
//!
//! A token is `U+E000`, the id in hexadecimal with each nibble written as
//! `U+E010 + nibble`, then `U+E001`. Every character is from the Unicode
//! private-use area, so none of them is a word character, digit or
//! whitespace, and no rewrite rule can match inside a token.
//!
//! ```text
//! id 0    → \u{E000}\u{E010}\u{E001}
//! id 0x2a → \u{E000}\u{E012}\u{E01A}\u{E001}
//! ```

use regex::Regex;
use std::sync::LazyLock;

pub const TOKEN_OPEN: char = '\u{E000}';
pub const TOKEN_CLOSE: char = '\u{E001}';

const NIBBLES: [char; 16] = [
    '\u{E010}', '\u{E011}', '\u{E012}', '\u{E013}', '\u{E014}', '\u{E015}', '\u{E016}',
    '\u{E017}', '\u{E018}', '\u{E019}', '\u{E01A}', '\u{E01B}', '\u{E01C}', '\u{E01D}',
    '\u{E01E}', '\u{E01F}',
];

/// Matches one complete token
pub static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}[\x{E010}-\x{E01F}]+\x{E001}").unwrap());

/// Matches any run of the reserved alphabet, token-shaped or not
pub static RESERVED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{E000}-\x{E01F}]+").unwrap());

pub fn encode(id: usize) -> String {
    let mut token = String::new();
    token.push(TOKEN_OPEN);
    let mut digits = Vec::new();
    let mut rest = id;
    loop {
        digits.push(NIBBLES[rest & 0xF]);
        rest >>= 4;
        if rest == 0 {
            break;
        }
    }
    token.extend(digits.into_iter().rev());
    token.push(TOKEN_CLOSE);
    token
}

/// Decode a complete token back to its id. Returns `None` for anything that
/// is not exactly one well-formed token or whose id overflows.
pub fn decode(token: &str) -> Option<usize> {
    let inner = token.strip_prefix(TOKEN_OPEN)?.strip_suffix(TOKEN_CLOSE)?;
    if inner.is_empty() {
        return None;
    }
    inner.chars().try_fold(0usize, |acc, c| {
        let nibble = (c as u32).checked_sub(NIBBLES[0] as u32)?;
        if nibble > 0xF {
            return None;
        }
        acc.checked_mul(16)?.checked_add(nibble as usize)
    })
}

/// Render tokens as `⟦P{id}⟧` so masked text can be read in stage dumps
pub fn display_form(masked: &str) -> String {
    TOKEN_REGEX
        .replace_all(masked, |caps: &regex::Captures| match decode(&caps[0]) {
            Some(id) => format!("⟦P{id}⟧"),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_ids() {
        assert_eq!(encode(0), "\u{E000}\u{E010}\u{E001}");
        assert_eq!(encode(15), "\u{E000}\u{E01F}\u{E001}");
        assert_eq!(encode(16), "\u{E000}\u{E011}\u{E010}\u{E001}");
    }

    #[test]
    fn test_decode_inverts_encode() {
        for id in [0, 1, 9, 10, 255, 4096, 123_456] {
            assert_eq!(decode(&encode(id)), Some(id));
        }
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert_eq!(decode("\u{E000}\u{E001}"), None);
        assert_eq!(decode("\u{E000}1\u{E001}"), None);
        assert_eq!(decode("___PROTECTED_0___"), None);
        assert_eq!(decode("\u{E000}\u{E010}"), None);
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: std::collections::HashSet<_> = (0..500).map(encode).collect();
        assert_eq!(tokens.len(), 500);
    }

    #[test]
    fn test_token_has_no_word_characters() {
        let word = Regex::new(r"[\w\s\d]").unwrap();
        assert!(!word.is_match(&encode(0xABCDEF)));
    }

    #[test]
    fn test_token_regex_matches_adjacent_tokens() {
        let text = format!("{}{}", encode(1), encode(2));
        assert_eq!(TOKEN_REGEX.find_iter(&text).count(), 2);
    }

    #[test]
    fn test_display_form() {
        let text = format!("see {} here", encode(42));
        assert_eq!(display_form(&text), "see ⟦P42⟧ here");
    }
}
