//! Constants shared by URI parsing and URL generation.

/// Default port for `http` and protocol-relative URLs.
pub const HTTP_PORT: u16 = 80;

/// Default port for `https` URLs.
pub const HTTPS_PORT: u16 = 443;

/// Scheme of secure URLs.
pub const SECURE_SCHEME: &str = "https";

/// Scheme of plain URLs.
pub const PLAIN_SCHEME: &str = "http";

/// Protocol prefix of protocol-relative URLs.
pub const RELATIVE_PROTOCOL: &str = "//";

/// Default number of trailing labels counted as the top-level domain.
pub const DEFAULT_TLD_LENGTH: usize = 1;

/// Key a scalar `params` value is stored under before query serialization.
pub const DEFAULT_PARAMS_KEY: &str = "params";
