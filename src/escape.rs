//! Percent-encoding helpers for generated URLs.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::form_urlencoded;

/// Characters left alone in a fragment: unreserved, sub-delims, `:@/?`.
const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Percent-encodes a URI fragment.
///
/// # Examples
///
/// ```
/// use link_uri::escape_fragment;
///
/// assert_eq!(escape_fragment("y z"), "y%20z");
/// assert_eq!(escape_fragment("section/2?a=b"), "section/2?a=b");
/// ```
#[must_use]
pub fn escape_fragment(fragment: &str) -> String {
    utf8_percent_encode(fragment, FRAGMENT).to_string()
}

/// Form-encodes a value for a query string or userinfo (space becomes `+`).
#[must_use]
pub fn escape_form(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encodes a user name or password for the userinfo part of a URL.
#[must_use]
pub fn escape_userinfo(value: &str) -> String {
    escape_form(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_escapes_space_and_hash() {
        assert_eq!(escape_fragment("a b#c"), "a%20b%23c");
    }

    #[test]
    fn fragment_keeps_sub_delims() {
        assert_eq!(escape_fragment("!$&'()*+,;=:@"), "!$&'()*+,;=:@");
    }

    #[test]
    fn fragment_encodes_non_ascii() {
        assert_eq!(escape_fragment("café"), "caf%C3%A9");
    }

    #[test]
    fn form_encodes_space_as_plus() {
        assert_eq!(escape_form("a b&c"), "a+b%26c");
        assert_eq!(escape_form("x*y-z._"), "x*y-z._");
    }

    #[test]
    fn userinfo_encodes_reserved() {
        assert_eq!(escape_userinfo("us@er"), "us%40er");
        assert_eq!(escape_userinfo("p:ss"), "p%3Ass");
    }
}
