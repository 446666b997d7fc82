//! Host string analysis shared by URI parsing and URL generation.
//!
//! Two concerns live here:
//!
//! - splitting a raw host string (as found in a `Host` header or a `host`
//!   option) into scheme, host and port, see [`HostSplit`];
//! - counting labels from the right of a named host to find its domain and
//!   subdomains, see [`extract_domain`] and [`extract_subdomains`].
//!
//! Label extraction does no DNS validation at all:
//!
//! ```
//! use link_uri::{extract_domain, extract_subdomains};
//!
//! assert_eq!(extract_domain("sub.do.main.app.test", 1), "app.test");
//! assert_eq!(extract_subdomains("sub.do.main.app.test", 2), vec!["sub", "do"]);
//! ```

use std::num::ParseIntError;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

/// Dotted IPv4 literal. Deliberately loose: no octet range checks.
static IPV4_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+$").expect("IPv4 host pattern compiles")
});

/// Full-form IPv6 address, bracketed or not, with optional scheme, port and path.
static IPV6_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:(https?):)?(?://|:)?",
        r"\[?((?:[0-9A-Fa-f]{1,4}:){7}[0-9A-Fa-f]{1,4})\]?",
        r"(?::([0-9]{1,5}))?(/.*)?$",
    ))
    .expect("IPv6 literal pattern compiles")
});

/// `(scheme://)?(bracketed-ipv6 | everything-up-to-colon)(:port)?`
static HOST_PORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^:]+://)?(\[[^\]]+\]|[^:]+)(?::([0-9]+)$)?")
        .expect("host/port pattern compiles")
});

/// Result of splitting a raw host string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSplit {
    /// A full-form IPv6 address, possibly unbracketed.
    Ipv6Literal {
        /// Scheme name without `:`, if one preceded the address
        scheme: Option<String>,
        /// The address, always bracketed
        host: String,
        /// Port following the address
        port: Option<u16>,
        /// Trailing path, empty when absent
        path: String,
    },
    /// A host with an optional protocol prefix and port suffix.
    HostPortSplit {
        /// Protocol prefix including `://`
        protocol: Option<String>,
        /// The bare host
        host: String,
        /// Port following the host
        port: Option<u16>,
    },
    /// Input that does not look like a host at all, or whose port does not
    /// fit in `u16`. Carries the raw input unchanged.
    PlainHost(String),
}

impl HostSplit {
    /// Splits a raw host string.
    ///
    /// IPv6 literals are recognized first; anything else is split at the
    /// first colon after an optional `scheme://` prefix. A port too large for
    /// `u16` is never dropped: the whole input comes back as
    /// [`HostSplit::PlainHost`].
    ///
    /// # Examples
    ///
    /// ```
    /// use link_uri::HostSplit;
    ///
    /// let split = HostSplit::parse("https://example.com:8080");
    /// assert_eq!(
    ///     split,
    ///     HostSplit::HostPortSplit {
    ///         protocol: Some("https://".to_string()),
    ///         host: "example.com".to_string(),
    ///         port: Some(8080),
    ///     }
    /// );
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(caps) = IPV6_LITERAL.captures(raw) {
            let port = match port_group(&caps) {
                Ok(port) => port,
                Err(err) => return Self::unsplit(raw, &err),
            };
            let split = Self::Ipv6Literal {
                scheme: caps.get(1).map(|m| m.as_str().to_string()),
                host: format!("[{}]", &caps[2]),
                port,
                path: caps.get(4).map_or_else(String::new, |m| m.as_str().to_string()),
            };
            trace!(raw, ?split, "split IPv6 literal host");
            return split;
        }

        if let Some(caps) = HOST_PORT.captures(raw) {
            let port = match port_group(&caps) {
                Ok(port) => port,
                Err(err) => return Self::unsplit(raw, &err),
            };
            let split = Self::HostPortSplit {
                protocol: caps.get(1).map(|m| m.as_str().to_string()),
                host: caps[2].to_string(),
                port,
            };
            trace!(raw, ?split, "split host and port");
            return split;
        }

        trace!(raw, "host did not split");
        Self::PlainHost(raw.to_string())
    }

    fn unsplit(raw: &str, err: &ParseIntError) -> Self {
        debug!(raw, error = %err, "port out of range, keeping host unsplit");
        Self::PlainHost(raw.to_string())
    }

    /// Returns the host portion of the split.
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Self::Ipv6Literal { host, .. }
            | Self::HostPortSplit { host, .. }
            | Self::PlainHost(host) => host,
        }
    }

    /// Returns the port carried by the raw host, if any.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        match self {
            Self::Ipv6Literal { port, .. } | Self::HostPortSplit { port, .. } => *port,
            Self::PlainHost(_) => None,
        }
    }
}

/// Returns true unless `host` is a dotted IPv4 literal.
///
/// Bracketed IPv6 literals count as named hosts here; they contain no dots,
/// so label extraction leaves them whole.
#[must_use]
pub fn is_named_host(host: &str) -> bool {
    !IPV4_HOST.is_match(host)
}

/// Returns the last `1 + tld_length` labels of `host`.
#[must_use]
pub fn extract_domain(host: &str, tld_length: usize) -> String {
    let labels = labels(host);
    let keep = tld_length.saturating_add(1).min(labels.len());
    labels[labels.len() - keep..].join(".")
}

/// Returns every label of `host` except the last `1 + tld_length`.
#[must_use]
pub fn extract_subdomains(host: &str, tld_length: usize) -> Vec<String> {
    let labels = labels(host);
    let cut = labels.len().saturating_sub(tld_length.saturating_add(1));
    labels[..cut].iter().map(|label| (*label).to_string()).collect()
}

/// Returns the subdomain labels of `host` joined with `.`.
#[must_use]
pub fn extract_subdomain(host: &str, tld_length: usize) -> String {
    extract_subdomains(host, tld_length).join(".")
}

// Both host patterns capture the port as group 3.
fn port_group(caps: &Captures<'_>) -> Result<Option<u16>, ParseIntError> {
    caps.get(3).map(|m| m.as_str().parse::<u16>()).transpose()
}

// Trailing empty labels (`example.com.`) are not labels.
fn labels(host: &str) -> Vec<&str> {
    let mut labels: Vec<&str> = host.split('.').collect();
    while labels.last().is_some_and(|label| label.is_empty()) {
        labels.pop();
    }
    labels
}
