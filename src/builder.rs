//! URL generation from [`UrlOptions`].
//!
//! [`UrlBuilder`] carries the configuration and turns an options bag into
//! either a path (`/blog/posts?page=2#top`) or a full URL
//! (`https://api.example.com:8443/blog/posts`). It keeps no state between
//! calls.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::config::UrlConfig;
use crate::constants::{HTTP_PORT, HTTPS_PORT, RELATIVE_PROTOCOL};
use crate::error::UrlError;
use crate::escape::{escape_fragment, escape_userinfo};
use crate::host::{HostSplit, extract_domain, extract_subdomain, is_named_host};
use crate::options::{ProtocolSetting, SubdomainSetting, UrlOptions};

/// A scheme name, optionally followed by `:` and `//`.
static PROTOCOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^:/]+)(:)?(//)?$").expect("protocol pattern compiles")
});

/// Generates paths and URLs under a fixed configuration.
///
/// # Examples
///
/// ```
/// use link_uri::{UrlBuilder, UrlConfig, UrlOptions};
///
/// let builder = UrlBuilder::new(UrlConfig::new().with_secure_protocol(true));
/// let options = UrlOptions::new()
///     .with_host("www.example.com:8443")
///     .with_subdomain("api")
///     .with_path("/v1/status");
///
/// assert_eq!(
///     builder.full_url_for(&options).unwrap(),
///     "https://api.example.com:8443/v1/status"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlBuilder {
    config: UrlConfig,
}

impl UrlBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub const fn new(config: UrlConfig) -> Self {
        Self { config }
    }

    /// Creates a builder over the process-wide configuration.
    #[must_use]
    pub fn global() -> Self {
        Self::new(UrlConfig::global())
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &UrlConfig {
        &self.config
    }

    /// Generates a path if `only_path` is set, else a full URL.
    ///
    /// # Errors
    ///
    /// See [`UrlBuilder::full_url_for`].
    pub fn url_for(&self, options: &UrlOptions) -> Result<String, UrlError> {
        if options.only_path {
            Ok(path_for(options))
        } else {
            self.full_url_for(options)
        }
    }

    /// Generates an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::MissingHost`] if no host is set or the host is
    /// blank, and [`UrlError::InvalidProtocol`] if the protocol option is
    /// unusable.
    pub fn full_url_for(&self, options: &UrlOptions) -> Result<String, UrlError> {
        let raw_host = options
            .host
            .as_deref()
            .filter(|host| !host.trim().is_empty())
            .ok_or(UrlError::MissingHost)?;

        let (implied_protocol, host, implied_port) = match HostSplit::parse(raw_host) {
            HostSplit::Ipv6Literal {
                scheme, host, port, ..
            } => (scheme.map(|scheme| format!("{scheme}://")), host, port),
            HostSplit::HostPortSplit {
                protocol,
                host,
                port,
            } => (protocol, host, port),
            HostSplit::PlainHost(host) => (None, host, None),
        };

        let protocol = match (&options.protocol, implied_protocol) {
            (ProtocolSetting::Unset, Some(implied)) => ProtocolSetting::Named(implied),
            (setting, _) => setting.clone(),
        };
        let protocol = self.normalize_protocol(&protocol)?;
        let host = self.normalize_host(&host, options);
        let port = Self::normalize_port(options.resolve_port(implied_port), &protocol);
        trace!(%protocol, %host, ?port, "normalized host triple");

        let mut url = protocol;
        if let (Some(user), Some(password)) = (&options.user, &options.password) {
            url.push_str(&escape_userinfo(user));
            url.push(':');
            url.push_str(&escape_userinfo(password));
            url.push('@');
        }
        url.push_str(&host);
        if let Some(port) = port {
            url.push(':');
            url.push_str(&port.to_string());
        }
        url.push_str(&path_for(options));
        Ok(url)
    }

    /// Turns a protocol setting into a prefix ending in `://`, or `//`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidProtocol`] if a named protocol is not a
    /// scheme optionally followed by `:` and `//`.
    ///
    /// # Examples
    ///
    /// ```
    /// use link_uri::{ProtocolSetting, UrlBuilder};
    ///
    /// let builder = UrlBuilder::default();
    /// let named = ProtocolSetting::Named("https:".to_string());
    /// assert_eq!(builder.normalize_protocol(&named).unwrap(), "https://");
    /// assert_eq!(builder.normalize_protocol(&ProtocolSetting::Unset).unwrap(), "http://");
    /// ```
    pub fn normalize_protocol(&self, protocol: &ProtocolSetting) -> Result<String, UrlError> {
        let name = match protocol {
            ProtocolSetting::Unset if self.config.secure_protocol => {
                return Ok("https://".to_string());
            }
            ProtocolSetting::Unset => return Ok("http://".to_string()),
            ProtocolSetting::Relative => return Ok(RELATIVE_PROTOCOL.to_string()),
            ProtocolSetting::Named(name) => name,
        };

        if name == RELATIVE_PROTOCOL {
            return Ok(RELATIVE_PROTOCOL.to_string());
        }
        match PROTOCOL.captures(name) {
            Some(caps) => Ok(format!("{}://", &caps[1])),
            None => {
                debug!(protocol = %name, "rejecting protocol option");
                Err(UrlError::InvalidProtocol {
                    protocol: name.clone(),
                })
            }
        }
    }

    /// Applies the subdomain, domain and tld-length options to a bare host.
    ///
    /// IPv4 literals pass through untouched, as does any host when the
    /// subdomain is left on [`SubdomainSetting::Auto`] and no domain is given.
    #[must_use]
    pub fn normalize_host(&self, host: &str, options: &UrlOptions) -> String {
        if !is_named_host(host) {
            return host.to_string();
        }

        let tld_length = options.tld_length.unwrap_or(self.config.tld_length);
        let mut normalized = match (&options.subdomain, &options.domain) {
            (SubdomainSetting::Auto, None) => return host.to_string(),
            (SubdomainSetting::Auto, Some(_)) => extract_subdomain(host, tld_length),
            (SubdomainSetting::Named(subdomain), _) => subdomain.clone(),
            (SubdomainSetting::Omit, _) => String::new(),
        };

        if !normalized.is_empty() {
            normalized.push('.');
        }
        match &options.domain {
            Some(domain) => normalized.push_str(domain),
            None => normalized.push_str(&extract_domain(host, tld_length)),
        }
        normalized
    }

    /// Returns the port to print after the host, if any.
    ///
    /// The default port of `http://` (80) or `https://` (443) is dropped;
    /// protocol-relative URLs keep every port.
    #[must_use]
    pub fn normalize_port(port: Option<u16>, protocol: &str) -> Option<u16> {
        let port = port?;
        match protocol {
            RELATIVE_PROTOCOL => Some(port),
            "https://" => (port != HTTPS_PORT).then_some(port),
            _ => (port != HTTP_PORT).then_some(port),
        }
    }
}

/// Generates the path, query and anchor part of a URL.
///
/// # Examples
///
/// ```
/// use link_uri::{Params, UrlOptions, path_for};
///
/// let options = UrlOptions::new()
///     .with_script_name("/blog/")
///     .with_path("/posts")
///     .with_params(Params::new().with("page", 2))
///     .with_anchor("top");
/// assert_eq!(path_for(&options), "/blog/posts?page=2#top");
/// ```
#[must_use]
pub fn path_for(options: &UrlOptions) -> String {
    let script_name = options.script_name.as_deref().unwrap_or_default();
    let mut path = script_name
        .strip_suffix('/')
        .unwrap_or(script_name)
        .to_string();

    if let Some(extra) = &options.path {
        path.push_str(extra);
    }

    if options.trailing_slash && path.trim().is_empty() {
        path = "/".to_string();
    }

    if let Some(params) = &options.params {
        let query = params.to_query();
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
    }

    if let Some(anchor) = &options.anchor {
        path.push('#');
        path.push_str(&escape_fragment(anchor));
    }

    path
}

/// [`UrlBuilder::url_for`] over the process-wide configuration.
///
/// # Errors
///
/// See [`UrlBuilder::full_url_for`].
pub fn url_for(options: &UrlOptions) -> Result<String, UrlError> {
    UrlBuilder::global().url_for(options)
}

/// [`UrlBuilder::full_url_for`] over the process-wide configuration.
///
/// # Errors
///
/// See [`UrlBuilder::full_url_for`].
pub fn full_url_for(options: &UrlOptions) -> Result<String, UrlError> {
    UrlBuilder::global().full_url_for(options)
}
