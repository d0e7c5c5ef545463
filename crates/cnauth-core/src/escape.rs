//! Percent-encoding for credential values.
//!
//! Letters, digits and `@ * _ - . /` pass through; every other byte of the
//! UTF-8 encoding becomes `%XX`. `+` is always encoded because servlet-style
//! form decoders read a literal `+` as a space.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes written as `%XX` in a parameter value.
pub const PARAM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'@')
    .remove(b'*')
    .remove(b'_')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/');

/// Encode a single parameter value.
///
/// ```
/// use cnauth_core::escape::escape_value;
///
/// assert_eq!(escape_value("http://x"), "http%3A//x");
/// assert_eq!(escape_value("a b&c=d"), "a%20b%26c%3Dd");
/// ```
pub fn escape_value(value: &str) -> String {
    utf8_percent_encode(value, PARAM_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_characters_pass_through() {
        let literal = "AZaz09@*_-./";
        assert_eq!(escape_value(literal), literal);
    }

    #[test]
    fn test_separators_are_encoded() {
        assert_eq!(escape_value("&"), "%26");
        assert_eq!(escape_value("="), "%3D");
        assert_eq!(escape_value(" "), "%20");
        assert_eq!(escape_value("?#"), "%3F%23");
    }

    #[test]
    fn test_plus_and_percent_are_encoded() {
        assert_eq!(escape_value("a+b"), "a%2Bb");
        assert_eq!(escape_value("100%"), "100%25");
    }

    #[test]
    fn test_non_ascii_uses_utf8_bytes() {
        assert_eq!(escape_value("é"), "%C3%A9");
        assert_eq!(escape_value("пароль"), "%D0%BF%D0%B0%D1%80%D0%BE%D0%BB%D1%8C");
    }

    #[test]
    fn test_url_keeps_path_slashes() {
        assert_eq!(
            escape_value("https://forge.example.com:8443/sf"),
            "https%3A//forge.example.com%3A8443/sf"
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(escape_value(""), "");
    }
}
