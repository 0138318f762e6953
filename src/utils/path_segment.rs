//! Percent-encoding of user-supplied names placed in link paths.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except ASCII letters, digits and `_.-~`.
///
/// The same set askama's `urlencode_strict` filter uses, so links built in
/// handlers and in templates agree.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Encodes `name` for use as a single path segment.
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_unchanged() {
        assert_eq!(encode_segment("rust-lang_1.0~x"), "rust-lang_1.0~x");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(encode_segment("a?b"), "a%3Fb");
        assert_eq!(encode_segment("c#"), "c%23");
        assert_eq!(encode_segment("x/y z"), "x%2Fy%20z");
    }

    #[test]
    fn test_non_ascii_is_encoded_as_utf8() {
        assert_eq!(encode_segment("枫"), "%E6%9E%AB");
    }
}
