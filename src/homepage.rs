use std::fmt;
use std::str::FromStr;

use url::Url;
use winnow::combinator::{alt, opt, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::error::{Error, Result};
use crate::field::Field;

/// A pod homepage: an absolute URI, kept exactly as the podspec wrote it.
///
/// The text must match the RFC 3986 `absolute-URI` grammar (optionally
/// followed by a fragment), so spaces, backslashes and other characters
/// that would need repairing are rejected rather than rewritten.
///
/// # Examples
///
/// ```
/// use podspec_metadata::Homepage;
///
/// let homepage: Homepage = "https://Example.com".parse().unwrap();
/// assert_eq!(homepage.as_str(), "https://Example.com");
/// assert_eq!(homepage.url().host_str(), Some("example.com"));
///
/// assert!("https://example.com/foo bar".parse::<Homepage>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homepage {
    raw: String,
    url: Url,
}

impl Homepage {
    /// The homepage as written in the podspec.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The homepage parsed as a URL, normalized.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FromStr for Homepage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        absolute_uri
            .parse(s)
            .map_err(|_| Error::invalid(Field::Homepage, format!("not an absolute URI: {s:?}")))?;
        let url = Url::parse(s).map_err(|e| Error::invalid(Field::Homepage, format!("{e}: {s:?}")))?;
        Ok(Homepage {
            raw: s.to_string(),
            url,
        })
    }
}

impl fmt::Display for Homepage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Winnow parsers

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Unreserved, sub-delims and the gen-delims other than `#`.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.'
                | '_'
                | '~'
                | ':'
                | '/'
                | '?'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
        )
}

fn pct_encoded(input: &mut &str) -> ModalResult<()> {
    ('%', take_while(2, |c: char| c.is_ascii_hexdigit()))
        .void()
        .parse_next(input)
}

fn uri_text(input: &mut &str) -> ModalResult<()> {
    repeat(0.., alt((take_while(1.., is_uri_char).void(), pct_encoded))).parse_next(input)
}

/// `scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
fn absolute_uri(input: &mut &str) -> ModalResult<()> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., is_scheme_char),
        ':',
        uri_text,
        opt(('#', uri_text)),
    )
        .void()
        .parse_next(input)
}
