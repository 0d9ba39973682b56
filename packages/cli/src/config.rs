//! Configuration constants and runtime settings for the command line.

use std::fmt;

use picoplaca_engine::HolidayMode;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CliError, Result};

/// Base URL of the AbstractAPI holidays service.
pub const DEFAULT_API_BASE_URL: &str = "https://holidays.abstractapi.com";

/// Country whose holidays are looked up remotely.
pub const DEFAULT_COUNTRY: &str = "EC";

/// HTTP timeout in seconds for the remote holiday lookup.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Holiday names the remote provider reports that are not public holidays.
///
/// Maundy Thursday is listed by the provider but is a working day in Ecuador.
pub const KNOWN_FALSE_POSITIVES: [&str; 1] = ["Jueves Santo"];

pub const ENV_API_KEY: &str = "HOLIDAYS_API_KEY";
pub const ENV_API_BASE_URL: &str = "HOLIDAYS_API_BASE_URL";
pub const ENV_COUNTRY: &str = "HOLIDAYS_API_COUNTRY";
pub const ENV_TIMEOUT_SECS: &str = "PICOPLACA_HTTP_TIMEOUT_SECS";
pub const ENV_HOLIDAY_MODE: &str = "PICOPLACA_HOLIDAY_MODE";

/// Country pattern: ISO 3166-1 alpha-2.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COUNTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid regex"));

/// Validate a country code.
///
/// # Examples
/// ```
/// use picoplaca_cli::config::validate_country;
///
/// assert!(validate_country("EC").is_ok());
/// assert!(validate_country("ecu").is_err());
/// ```
pub fn validate_country(country: &str) -> Result<()> {
    if COUNTRY_PATTERN.is_match(country) {
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "{ENV_COUNTRY} must be an ISO 3166-1 alpha-2 code, got '{country}'"
        )))
    }
}

/// Settings for the holiday lookup.
///
/// The API key is optional here: local mode never needs it, and remote mode
/// reports its absence as an authorization failure on first use.
#[derive(Clone)]
pub struct LookupConfig {
    pub mode: HolidayMode,
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub country: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("mode", &self.mode)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("country", &self.country)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LookupConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mode = match var(ENV_HOLIDAY_MODE) {
            Some(value) => value
                .parse()
                .map_err(|e| CliError::Config(format!("{ENV_HOLIDAY_MODE}: {e}")))?,
            None => HolidayMode::default(),
        };

        let api_key = var(ENV_API_KEY).filter(|key| !key.trim().is_empty());

        let api_base_url = var(ENV_API_BASE_URL).unwrap_or_else(|| DEFAULT_API_BASE_URL.into());

        // Validated when the remote source is built
        let country = var(ENV_COUNTRY).unwrap_or_else(|| DEFAULT_COUNTRY.into());

        let timeout_secs = var(ENV_TIMEOUT_SECS)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(HTTP_TIMEOUT_SECS);

        Ok(Self {
            mode,
            api_key,
            api_base_url,
            country,
            timeout_secs,
        })
    }

    /// Create a config builder for testing.
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder {
            mode: HolidayMode::default(),
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            country: DEFAULT_COUNTRY.into(),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }

    /// Same settings, with the mode replaced.
    #[must_use]
    pub fn with_mode(mut self, mode: HolidayMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Builder for constructing `LookupConfig` in tests.
pub struct LookupConfigBuilder {
    mode: HolidayMode,
    api_key: Option<String>,
    api_base_url: String,
    country: String,
    timeout_secs: u64,
}

impl LookupConfigBuilder {
    pub fn mode(mut self, mode: HolidayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> LookupConfig {
        LookupConfig {
            mode: self.mode,
            api_key: self.api_key,
            api_base_url: self.api_base_url,
            country: self.country,
            timeout_secs: self.timeout_secs,
        }
    }
}
