//! Main URI value type.

use std::fmt;
use std::str::FromStr;

use fluent_uri::UriRef;
use tracing::debug;

use crate::config::UrlConfig;
use crate::constants::{HTTP_PORT, HTTPS_PORT, PLAIN_SCHEME, SECURE_SCHEME};
use crate::error::{ParseError, ParseErrorKind};
use crate::host::{HostSplit, extract_domain, extract_subdomains, is_named_host};

/// A decomposed URI: scheme, host, port, path, query and fragment.
///
/// Values are built from a well-formed string with [`Uri::parse`], from
/// untrusted input with [`Uri::parse_faulty`], or from parts with
/// [`Uri::new`]. Every field can be reassigned afterwards; derived values
/// such as [`Uri::port_string`] are computed on each call.
///
/// # Examples
///
/// ```
/// use link_uri::Uri;
///
/// let mut uri = Uri::parse("http://myapp.test/page?id#me").unwrap();
/// assert_eq!(uri.protocol(), "http://");
/// assert_eq!(uri.host(), Some("myapp.test"));
/// assert!(uri.is_standard_port());
///
/// uri.set_port(Some(444));
/// uri.set_host("we.are");
/// assert_eq!(uri.port_string(), ":444");
/// assert_eq!(uri.host_with_port(), "we.are:444");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Uri {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Uri {
    /// Creates a URI from its parts.
    ///
    /// `host` must not carry a port; pass the port separately.
    #[must_use]
    pub fn new(
        scheme: Option<&str>,
        host: Option<&str>,
        port: Option<u16>,
        path: &str,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Self {
        Self {
            scheme: scheme.map(str::to_string),
            host: host.map(str::to_string),
            port,
            path: path.to_string(),
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        }
    }

    /// Returns the value standing for "no URI": every field absent or empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Strictly parses a URI reference.
    ///
    /// Components are taken verbatim from the RFC 3986 grammar: no dot
    /// segments are removed, empty paths stay empty and IP literals keep
    /// their written form. Relative references are accepted. An `http` or
    /// `https` URI without an explicit port gets the scheme's default port.
    ///
    /// # Examples
    ///
    /// ```
    /// use link_uri::Uri;
    ///
    /// let uri = Uri::parse("http:example.com").unwrap();
    /// assert_eq!(uri.host(), None);
    /// assert_eq!(uri.path(), "example.com");
    ///
    /// let uri = Uri::parse("/page?x#y").unwrap();
    /// assert_eq!(uri.scheme(), None);
    /// assert_eq!(uri.query(), Some("x"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty, does not match the URI
    /// reference grammar, or carries a port that does not fit in `u16`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError {
                input: String::new(),
                kind: ParseErrorKind::Empty,
            });
        }

        let reference = UriRef::parse(input).map_err(|e| ParseError {
            input: input.to_string(),
            kind: ParseErrorKind::Invalid(e),
        })?;
        let scheme = reference.scheme().map(|scheme| scheme.as_str().to_string());

        let (host, port) = match reference.authority() {
            Some(authority) => {
                let port = authority.port_to_u16().map_err(|e| ParseError {
                    input: input.to_string(),
                    kind: ParseErrorKind::InvalidPort(e),
                })?;
                (Some(authority.host().to_string()), port)
            }
            None => (None, None),
        };
        let port = port.or_else(|| scheme.as_deref().and_then(default_port));

        Ok(Self {
            scheme,
            host,
            port,
            path: reference.path().as_str().to_string(),
            query: reference.query().map(|query| query.as_str().to_string()),
            fragment: reference
                .fragment()
                .map(|fragment| fragment.as_str().to_string()),
        })
    }

    /// Parses untrusted input such as a `Host` header, never failing.
    ///
    /// Full-form IPv6 addresses are recognized even without brackets. Any
    /// other input goes through [`Uri::parse`]; if that fails the result is
    /// [`Uri::empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use link_uri::Uri;
    ///
    /// let uri = Uri::parse_faulty("http://2001:0db8:85a3:0000:0000:8a2e:0370:7334");
    /// assert_eq!(uri.to_string(), "http://[2001:0db8:85a3:0000:0000:8a2e:0370:7334]");
    ///
    /// assert_eq!(Uri::parse_faulty(":"), Uri::empty());
    /// assert_eq!(Uri::parse_faulty("not a uri"), Uri::empty());
    /// ```
    #[must_use]
    pub fn parse_faulty(input: &str) -> Self {
        if let HostSplit::Ipv6Literal {
            scheme,
            host,
            port,
            path,
        } = HostSplit::parse(input)
        {
            return Self {
                scheme,
                host: Some(host),
                port,
                path,
                query: None,
                fragment: None,
            };
        }

        let input = if input == ":" { "" } else { input };
        match Self::parse(input) {
            Ok(uri) => uri,
            Err(err) => {
                debug!(error = %err, "discarding malformed URI");
                Self::empty()
            }
        }
    }

    /// Builds a URI from a raw `Host` header and the transport's security.
    ///
    /// A header without a scheme gets `https` when `secure` is set and `http`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use link_uri::Uri;
    ///
    /// let uri = Uri::from_host_header("shop.example.com:8443", true);
    /// assert_eq!(uri.protocol(), "https://");
    /// assert_eq!(uri.host_with_port(), "shop.example.com:8443");
    /// assert_eq!(uri.subdomain(), "shop");
    /// ```
    #[must_use]
    pub fn from_host_header(raw: &str, secure: bool) -> Self {
        let raw = raw.trim();
        if raw.contains("://") {
            return Self::parse_faulty(raw);
        }

        let scheme = if secure { SECURE_SCHEME } else { PLAIN_SCHEME };
        Self::parse_faulty(&format!("{scheme}://{raw}"))
    }

    /// Returns the scheme, if any.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the host, if any. IPv6 hosts are bracketed.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, if any.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path, possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query without the leading `?`, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment without the leading `#`, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Sets the scheme.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = Some(scheme.into());
    }

    /// Sets the host.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = Some(host.into());
    }

    /// Sets or clears the port.
    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Sets the path.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Sets or clears the query.
    pub fn set_query(&mut self, query: Option<&str>) {
        self.query = query.map(str::to_string);
    }

    /// Sets or clears the fragment.
    pub fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.map(str::to_string);
    }

    /// Returns the scheme followed by `://`, or an empty string without a scheme.
    #[must_use]
    pub fn protocol(&self) -> String {
        self.scheme
            .as_deref()
            .map_or_else(String::new, |scheme| format!("{scheme}://"))
    }

    /// Returns 443 for `https` and 80 for everything else.
    #[must_use]
    pub fn standard_port(&self) -> u16 {
        if self.scheme.as_deref() == Some(SECURE_SCHEME) {
            HTTPS_PORT
        } else {
            HTTP_PORT
        }
    }

    /// Returns true if the port equals [`Uri::standard_port`].
    #[must_use]
    pub fn is_standard_port(&self) -> bool {
        self.port == Some(self.standard_port())
    }

    /// Returns the port unless it is absent or standard.
    #[must_use]
    pub fn optional_port(&self) -> Option<u16> {
        self.port.filter(|_| !self.is_standard_port())
    }

    /// Returns `":<port>"` for a non-standard port, else an empty string.
    #[must_use]
    pub fn port_string(&self) -> String {
        self.optional_port()
            .map_or_else(String::new, |port| format!(":{port}"))
    }

    /// Returns the host followed by [`Uri::port_string`].
    #[must_use]
    pub fn host_with_port(&self) -> String {
        format!("{}{}", self.host.as_deref().unwrap_or_default(), self.port_string())
    }

    /// Returns the domain using the globally configured top-level-domain length.
    #[must_use]
    pub fn domain(&self) -> Option<String> {
        self.domain_for_tld(UrlConfig::global().tld_length)
    }

    /// Returns the last `1 + tld_length` labels of a named host.
    ///
    /// IPv4 literals and missing hosts have no domain.
    #[must_use]
    pub fn domain_for_tld(&self, tld_length: usize) -> Option<String> {
        self.named_host().map(|host| extract_domain(host, tld_length))
    }

    /// Returns the subdomain labels using the globally configured top-level-domain length.
    #[must_use]
    pub fn subdomains(&self) -> Vec<String> {
        self.subdomains_for_tld(UrlConfig::global().tld_length)
    }

    /// Returns every label of a named host except the last `1 + tld_length`.
    #[must_use]
    pub fn subdomains_for_tld(&self, tld_length: usize) -> Vec<String> {
        self.named_host()
            .map_or_else(Vec::new, |host| extract_subdomains(host, tld_length))
    }

    /// Returns the subdomain using the globally configured top-level-domain length.
    #[must_use]
    pub fn subdomain(&self) -> String {
        self.subdomain_for_tld(UrlConfig::global().tld_length)
    }

    /// Returns [`Uri::subdomains_for_tld`] joined with `.`.
    #[must_use]
    pub fn subdomain_for_tld(&self, tld_length: usize) -> String {
        self.subdomains_for_tld(tld_length).join(".")
    }

    fn named_host(&self) -> Option<&str> {
        self.host
            .as_deref()
            .filter(|host| !host.is_empty() && is_named_host(host))
    }
}

// Schemes are case-insensitive.
fn default_port(scheme: &str) -> Option<u16> {
    if scheme.eq_ignore_ascii_case(SECURE_SCHEME) {
        Some(HTTPS_PORT)
    } else if scheme.eq_ignore_ascii_case(PLAIN_SCHEME) {
        Some(HTTP_PORT)
    } else {
        None
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(host) = &self.host {
            write!(f, "//{host}{}", self.port_string())?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPV6: &str = "2001:0db8:85a3:0000:0000:8a2e:0370:7334";

    #[test]
    fn parse_valid_uri() {
        let uri = Uri::parse("http://myapp.test/page?id#me").unwrap();

        assert_eq!(uri.scheme(), Some("http"));
        assert_eq!(uri.protocol(), "http://");
        assert_eq!(uri.host(), Some("myapp.test"));
        assert_eq!(uri.path(), "/page");
        assert_eq!(uri.query(), Some("id"));
        assert_eq!(uri.fragment(), Some("me"));
        assert_eq!(uri.port(), Some(80));
    }

    #[test]
    fn parse_empty_returns_error() {
        let result = Uri::parse("");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::Empty,
                ..
            })
        ));
    }

    #[test]
    fn parse_invalid_returns_error() {
        let result = Uri::parse("http://exa mple.com");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::Invalid(_),
                ..
            })
        ));
    }

    #[test]
    fn parse_oversized_port_returns_error() {
        let result = Uri::parse("http://example.com:70000/");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::InvalidPort(_),
                ..
            })
        ));
    }

    #[test]
    fn parse_keeps_components_verbatim() {
        let uri = Uri::parse("http://myapp.test").unwrap();
        assert_eq!(uri.path(), "");
        assert_eq!(uri.port(), Some(80));

        let uri = Uri::parse("http://a.test/x/../y").unwrap();
        assert_eq!(uri.path(), "/x/../y");

        let uri = Uri::parse("http://Shop.Example.COM/").unwrap();
        assert_eq!(uri.host(), Some("Shop.Example.COM"));
    }

    #[test]
    fn parse_opaque_uri_has_no_host() {
        let uri = Uri::parse("http:example.com").unwrap();
        assert_eq!(uri.scheme(), Some("http"));
        assert_eq!(uri.host(), None);
        assert_eq!(uri.path(), "example.com");
        assert_eq!(uri.domain(), None);
    }

    #[test]
    fn parse_uncompressed_ipv6_host() {
        let uri = Uri::parse("http://[2001:0db8:0000:0000:0000:0000:0000:0001]:8080/").unwrap();
        assert_eq!(
            uri.host(),
            Some("[2001:0db8:0000:0000:0000:0000:0000:0001]")
        );
        assert_eq!(uri.port(), Some(8080));
    }

    #[test]
    fn parse_relative_reference() {
        let uri = Uri::parse("/page?x#y").unwrap();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.host(), None);
        assert_eq!(uri.port(), None);
        assert_eq!(uri.path(), "/page");
        assert_eq!(uri.query(), Some("x"));
        assert_eq!(uri.fragment(), Some("y"));
        assert_eq!(uri.to_string(), "/page?x#y");
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let uri = Uri::parse("https://secure.test:/").unwrap();
        assert_eq!(uri.port(), Some(443));
    }

    #[test]
    fn https_default_port() {
        let uri = Uri::parse("https://secure.test/").unwrap();
        assert_eq!(uri.port(), Some(443));
        assert_eq!(uri.standard_port(), 443);
        assert!(uri.is_standard_port());
        assert_eq!(uri.port_string(), "");
        assert_eq!(uri.optional_port(), None);
    }

    #[test]
    fn explicit_port_is_kept() {
        let uri = Uri::parse("https://secure.test:8443/").unwrap();
        assert_eq!(uri.port(), Some(8443));
        assert_eq!(uri.optional_port(), Some(8443));
        assert_eq!(uri.host_with_port(), "secure.test:8443");
    }

    #[test]
    fn mutation_recomputes_derived_values() {
        let mut uri = Uri::parse("http://myapp.test/page?id#me").unwrap();

        uri.set_port(Some(444));
        assert!(!uri.is_standard_port());
        assert_eq!(uri.standard_port(), 80);
        assert_eq!(uri.port_string(), ":444");

        uri.set_host("we.are");
        assert_eq!(uri.host_with_port(), "we.are:444");

        uri.set_scheme("https");
        assert_eq!(uri.standard_port(), 443);
        uri.set_port(Some(443));
        assert_eq!(uri.host_with_port(), "we.are");
        assert_eq!(uri.to_string(), "https://we.are/page?id#me");
    }

    #[test]
    fn missing_port_is_not_standard() {
        let uri = Uri::new(Some("http"), Some("example.com"), None, "/", None, None);
        assert!(!uri.is_standard_port());
        assert_eq!(uri.port_string(), "");
    }

    #[test]
    fn faulty_ipv6_literal() {
        let uri = Uri::parse_faulty(&format!("http://{IPV6}"));
        assert_eq!(uri.scheme(), Some("http"));
        assert_eq!(uri.host(), Some(format!("[{IPV6}]").as_str()));
        assert_eq!(uri.to_string(), format!("http://[{IPV6}]"));
    }

    #[test]
    fn faulty_ipv6_with_port_and_path() {
        let uri = Uri::parse_faulty(&format!("https://[{IPV6}]:8443/health"));
        assert_eq!(uri.port(), Some(8443));
        assert_eq!(uri.path(), "/health");
        assert_eq!(uri.to_string(), format!("https://[{IPV6}]:8443/health"));
    }

    #[test]
    fn faulty_colon_is_empty() {
        let uri = Uri::parse_faulty(":");
        assert_eq!(uri, Uri::empty());
        assert_eq!(uri.to_string(), "");
    }

    #[test]
    fn faulty_garbage_is_empty() {
        assert_eq!(Uri::parse_faulty("http://exa mple.com"), Uri::empty());
        assert_eq!(Uri::parse_faulty(""), Uri::empty());
    }

    #[test]
    fn faulty_well_formed_matches_strict() {
        let input = "https://api.example.com:9000/v1?x=1";
        assert_eq!(Uri::parse_faulty(input), Uri::parse(input).unwrap());
    }

    #[test]
    fn host_header_without_scheme() {
        let uri = Uri::from_host_header("example.com:3000", false);
        assert_eq!(uri.scheme(), Some("http"));
        assert_eq!(uri.host(), Some("example.com"));
        assert_eq!(uri.port(), Some(3000));
    }

    #[test]
    fn host_header_unbracketed_ipv6() {
        let uri = Uri::from_host_header(IPV6, true);
        assert_eq!(uri.scheme(), Some("https"));
        assert_eq!(uri.host(), Some(format!("[{IPV6}]").as_str()));
    }

    #[test]
    fn host_header_garbage() {
        assert_eq!(Uri::from_host_header("bad host", false), Uri::empty());
        assert_eq!(Uri::from_host_header("example.com:70000", false), Uri::empty());
    }

    #[test]
    fn domain_and_subdomains() {
        let uri = Uri::new(Some("http"), Some("sub.do.main.app.test"), None, "", None, None);

        assert_eq!(uri.subdomain(), "sub.do.main");
        assert_eq!(uri.subdomain_for_tld(2), "sub.do");
        assert_eq!(uri.subdomain_for_tld(3), "sub");
        assert_eq!(uri.subdomains(), vec!["sub", "do", "main"]);
        assert_eq!(uri.subdomains_for_tld(3), vec!["sub"]);
        assert_eq!(uri.domain().as_deref(), Some("app.test"));
        assert_eq!(uri.domain_for_tld(2).as_deref(), Some("main.app.test"));
    }

    #[test]
    fn ip_host_has_no_domain() {
        let uri = Uri::parse("http://192.168.1.10:8080/").unwrap();
        assert_eq!(uri.domain(), None);
        assert!(uri.subdomains().is_empty());
        assert_eq!(uri.subdomain(), "");
    }

    #[test]
    fn no_host_has_no_domain() {
        assert_eq!(Uri::empty().domain(), None);
        assert!(Uri::empty().subdomains().is_empty());
    }

    #[test]
    fn display_without_scheme_uses_network_path() {
        let uri = Uri::new(None, Some("cdn.test"), Some(8080), "/a.js", None, None);
        assert_eq!(uri.to_string(), "//cdn.test:8080/a.js");
    }

    #[test]
    fn display_roundtrip() {
        let input = "https://shop.example.com:8443/cart?item=3#total";
        let uri = Uri::parse(input).unwrap();
        assert_eq!(uri.to_string(), input);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_display_form() {
        let uri = Uri::parse("https://example.com:8443/a?b#c").unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, "\"https://example.com:8443/a?b#c\"");

        let back: Uri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uri);
        assert!(serde_json::from_str::<Uri>("\"not a uri\"").is_err());
    }

    #[test]
    fn from_str_and_try_from() {
        let a: Uri = "http://a.test/".parse().unwrap();
        let b = Uri::try_from("http://a.test/").unwrap();
        assert_eq!(a, b);
    }
}
