//! Options for URL generation.

use crate::params::Params;

/// How the protocol of a generated URL is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProtocolSetting {
    /// Take it from the host string, else from the configuration
    #[default]
    Unset,
    /// Protocol-relative (`//`); a protocol in the host string is ignored
    Relative,
    /// An explicit scheme such as `https`, `https:` or `https://`
    Named(String),
}

/// How the port of a generated URL is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortSetting {
    /// Use the port carried by the host string, if any
    #[default]
    FromHost,
    /// Use this port
    Port(u16),
    /// Emit no port, even if the host string carries one
    NoPort,
}

impl PortSetting {
    fn resolve(self, implied: Option<u16>) -> Option<u16> {
        match self {
            Self::FromHost => implied,
            Self::Port(port) => Some(port),
            Self::NoPort => None,
        }
    }
}

/// How the subdomain of a generated host is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubdomainSetting {
    /// Keep the host's own subdomains
    #[default]
    Auto,
    /// Drop all subdomains
    Omit,
    /// Replace the subdomains with this value
    Named(String),
}

/// Options for a single URL generation call.
///
/// # Examples
///
/// ```
/// use link_uri::{UrlBuilder, UrlOptions};
///
/// let options = UrlOptions::new()
///     .with_host("www.example.com")
///     .with_path("/posts")
///     .with_anchor("comments");
/// let url = UrlBuilder::default().url_for(&options).unwrap();
/// assert_eq!(url, "http://www.example.com/posts#comments");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlOptions {
    /// Generate only the path, query and anchor
    pub only_path: bool,
    /// Host to link to, possibly with protocol and port
    pub host: Option<String>,
    /// Protocol selection
    pub protocol: ProtocolSetting,
    /// Port selection
    pub port: PortSetting,
    /// Mount point prepended to the path
    pub script_name: Option<String>,
    /// Path below the mount point
    pub path: Option<String>,
    /// Turn an empty or blank path into `/`
    pub trailing_slash: bool,
    /// Query parameters
    pub params: Option<Params>,
    /// Fragment, escaped on output; an empty anchor still yields `#`
    pub anchor: Option<String>,
    /// User name for the userinfo part
    pub user: Option<String>,
    /// Password for the userinfo part
    pub password: Option<String>,
    /// Subdomain selection
    pub subdomain: SubdomainSetting,
    /// Domain replacing the host's own domain
    pub domain: Option<String>,
    /// Top-level-domain length overriding the configuration
    pub tld_length: Option<usize>,
}

impl UrlOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests only the path.
    #[must_use]
    pub const fn with_only_path(mut self, only_path: bool) -> Self {
        self.only_path = only_path;
        self
    }

    /// Sets the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets an explicit protocol.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = ProtocolSetting::Named(protocol.into());
        self
    }

    /// Generates a protocol-relative URL.
    #[must_use]
    pub fn with_relative_protocol(mut self) -> Self {
        self.protocol = ProtocolSetting::Relative;
        self
    }

    /// Sets an explicit port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = PortSetting::Port(port);
        self
    }

    /// Suppresses any port, including one carried by the host.
    #[must_use]
    pub const fn without_port(mut self) -> Self {
        self.port = PortSetting::NoPort;
        self
    }

    /// Sets the mount point.
    #[must_use]
    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = Some(script_name.into());
        self
    }

    /// Sets the path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Requests `/` in place of an empty or blank path.
    #[must_use]
    pub const fn with_trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = trailing_slash;
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_params(mut self, params: impl Into<Params>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Sets the anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Sets the user name and password.
    #[must_use]
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    /// Replaces the host's subdomains.
    #[must_use]
    pub fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = SubdomainSetting::Named(subdomain.into());
        self
    }

    /// Drops the host's subdomains.
    #[must_use]
    pub fn without_subdomain(mut self) -> Self {
        self.subdomain = SubdomainSetting::Omit;
        self
    }

    /// Replaces the host's domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Overrides the configured top-level-domain length.
    #[must_use]
    pub const fn with_tld_length(mut self, tld_length: usize) -> Self {
        self.tld_length = Some(tld_length);
        self
    }

    pub(crate) fn resolve_port(&self, implied: Option<u16>) -> Option<u16> {
        self.port.resolve(implied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = UrlOptions::default();
        assert!(!options.only_path);
        assert_eq!(options.protocol, ProtocolSetting::Unset);
        assert_eq!(options.port, PortSetting::FromHost);
        assert_eq!(options.subdomain, SubdomainSetting::Auto);
        assert!(options.params.is_none());
    }

    #[test]
    fn port_resolution() {
        let options = UrlOptions::new();
        assert_eq!(options.resolve_port(Some(3000)), Some(3000));
        assert_eq!(options.resolve_port(None), None);

        let options = UrlOptions::new().with_port(8080);
        assert_eq!(options.resolve_port(Some(3000)), Some(8080));

        let options = UrlOptions::new().without_port();
        assert_eq!(options.resolve_port(Some(3000)), None);
    }

    #[test]
    fn later_settings_win() {
        let options = UrlOptions::new()
            .with_subdomain("api")
            .without_subdomain()
            .with_protocol("https")
            .with_relative_protocol();
        assert_eq!(options.subdomain, SubdomainSetting::Omit);
        assert_eq!(options.protocol, ProtocolSetting::Relative);
    }
}
