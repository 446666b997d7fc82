//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use link_uri::prelude::*;
//!
//! let uri = Uri::from_host_header("api.example.com", true);
//! let url = UrlBuilder::default()
//!     .url_for(&UrlOptions::new().with_host(uri.host_with_port()).with_path("/v1"))
//!     .unwrap();
//! assert_eq!(url, "http://api.example.com/v1");
//! ```
//!
//! Free helper functions (`to_query`, `escape_fragment`, the `extract_*`
//! family) are left out; import them by name.

pub use crate::{
    // Core types
    HostSplit, ParamValue, Params, Uri,
    // Generation
    PortSetting, ProtocolSetting, SubdomainSetting, UrlBuilder, UrlConfig, UrlOptions,
    // Errors
    ConfigError, ParseError, ParseErrorKind, UrlError,
};
