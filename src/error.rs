//! Error types for URI parsing and URL generation.

use std::fmt;
use std::num::ParseIntError;

/// Errors that can occur when strictly parsing a URI.
#[derive(Debug)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// Input does not match the URI reference grammar
    Invalid(fluent_uri::error::ParseError),
    /// The port is syntactically valid but does not fit in `u16`
    InvalidPort(ParseIntError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::Invalid(e) => write!(f, "{e}"),
            ParseErrorKind::InvalidPort(e) => write!(f, "invalid port: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Empty => None,
            ParseErrorKind::Invalid(e) => Some(e),
            ParseErrorKind::InvalidPort(e) => Some(e),
        }
    }
}

/// Errors raised while generating a URL from options.
///
/// Both variants indicate a misconfigured call site rather than bad
/// runtime input, so callers are expected to propagate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// A full URL was requested but no host was supplied
    MissingHost,
    /// The `protocol` option is not a recognizable scheme
    InvalidProtocol {
        /// The rejected protocol value
        protocol: String,
    },
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHost => write!(
                f,
                "missing host to link to; provide a host option or request only the path"
            ),
            Self::InvalidProtocol { protocol } => {
                write!(f, "invalid protocol option: {protocol:?}")
            }
        }
    }
}

impl std::error::Error for UrlError {}

/// Errors for process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A global configuration has already been installed
    AlreadyInstalled,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInstalled => {
                write!(f, "global URL configuration is already installed")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
