//! URL generation and host decomposition for HTTP link targets.
//!
//! This crate covers the two directions a web application needs:
//!
//! - **Decomposition**: turn a request's `Host` header (possibly malformed,
//!   possibly an IPv6 literal) into a [`Uri`] with scheme, host, port, and
//!   the host's domain and subdomains.
//! - **Generation**: turn a bag of [`UrlOptions`] into a path or an absolute
//!   URL, normalizing protocol, host and port along the way.
//!
//! # Quick Start
//!
//! ```rust
//! use link_uri::Uri;
//!
//! let uri = Uri::parse("https://blog.example.com:8443/posts?page=2#top").unwrap();
//!
//! assert_eq!(uri.protocol(), "https://");
//! assert_eq!(uri.host_with_port(), "blog.example.com:8443");
//! assert_eq!(uri.domain().as_deref(), Some("example.com"));
//! assert_eq!(uri.subdomain(), "blog");
//!
//! // Untrusted input never fails
//! let uri = Uri::parse_faulty(":");
//! assert_eq!(uri.to_string(), "");
//! ```
//!
//! # Generating URLs
//!
//! ```rust
//! use link_uri::{Params, UrlBuilder, UrlConfig, UrlOptions};
//!
//! let builder = UrlBuilder::new(UrlConfig::new().with_tld_length(2));
//! let options = UrlOptions::new()
//!     .with_host("www.example.co.uk")
//!     .with_subdomain("shop")
//!     .with_path("/basket")
//!     .with_params(Params::new().with("item", 42));
//!
//! assert_eq!(
//!     builder.url_for(&options).unwrap(),
//!     "http://shop.example.co.uk/basket?item=42"
//! );
//! ```
//!
//! # Configuration
//!
//! [`UrlConfig`] holds the two process-wide defaults: whether an unspecified
//! protocol means `https`, and how many labels make up the top-level domain.
//! Pass it to a [`UrlBuilder`], or install it once at startup and use the
//! free functions [`url_for`] and [`full_url_for`].
//!
//! # Domains and Subdomains
//!
//! | Host | tld length | Domain | Subdomains |
//! |------|------------|--------|------------|
//! | `sub.do.main.app.test` | 1 | `app.test` | `sub`, `do`, `main` |
//! | `sub.do.main.app.test` | 2 | `main.app.test` | `sub`, `do` |
//! | `www.example.co.uk` | 2 | `example.co.uk` | `www` |
//! | `192.168.1.1` | any | none | none |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod config;
mod constants;
mod error;
mod escape;
mod host;
mod options;
mod params;
pub mod prelude;
mod uri;

pub use builder::{UrlBuilder, full_url_for, path_for, url_for};
pub use config::UrlConfig;
pub use constants::{
    DEFAULT_PARAMS_KEY, DEFAULT_TLD_LENGTH, HTTP_PORT, HTTPS_PORT, PLAIN_SCHEME,
    RELATIVE_PROTOCOL, SECURE_SCHEME,
};
pub use error::{ConfigError, ParseError, ParseErrorKind, UrlError};
pub use escape::{escape_form, escape_fragment, escape_userinfo};
pub use host::{HostSplit, extract_domain, extract_subdomain, extract_subdomains, is_named_host};
pub use options::{PortSetting, ProtocolSetting, SubdomainSetting, UrlOptions};
pub use params::{ParamValue, Params, to_query};
pub use uri::Uri;
