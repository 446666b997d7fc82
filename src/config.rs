//! Configuration for URL generation.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::constants::DEFAULT_TLD_LENGTH;
use crate::error::ConfigError;

static GLOBAL: OnceCell<UrlConfig> = OnceCell::new();

/// Defaults applied when generating URLs.
///
/// A configuration is either handed to a [`UrlBuilder`](crate::UrlBuilder)
/// directly, or installed once at startup with [`UrlConfig::install`] and
/// read back with [`UrlConfig::global`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlConfig {
    /// Whether an unspecified protocol means `https://`.
    ///
    /// Default: false
    pub secure_protocol: bool,

    /// Number of trailing labels counted as the top-level domain.
    ///
    /// Use 2 for hosts under suffixes such as `co.uk`.
    /// Default: 1
    pub tld_length: usize,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            secure_protocol: false,
            tld_length: DEFAULT_TLD_LENGTH,
        }
    }
}

impl UrlConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables `https://` as the default protocol.
    #[must_use]
    pub const fn with_secure_protocol(mut self, secure: bool) -> Self {
        self.secure_protocol = secure;
        self
    }

    /// Sets the default top-level-domain length.
    #[must_use]
    pub const fn with_tld_length(mut self, tld_length: usize) -> Self {
        self.tld_length = tld_length;
        self
    }

    /// Installs this configuration as the process-wide default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInstalled`] if a configuration was
    /// installed earlier; the earlier one stays in effect.
    pub fn install(self) -> Result<(), ConfigError> {
        GLOBAL.set(self).map_err(|_| ConfigError::AlreadyInstalled)?;
        debug!(
            secure_protocol = self.secure_protocol,
            tld_length = self.tld_length,
            "installed global URL configuration"
        );
        Ok(())
    }

    /// Returns the installed configuration, or the defaults if none was installed.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.get().copied().unwrap_or_default()
    }
}
