//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CM_TAX_RATE_BPS` - Sales tax in basis points (default: 825)
//! - `CM_FLAT_SHIPPING_CENTS` - Flat shipping charge (default: 599)
//! - `CM_FREE_SHIPPING_THRESHOLD_CENTS` - Free shipping from this subtotal,
//!   or `none` to always charge (default: 5000)
//! - `CM_PLATFORM_FEE_BPS` - Platform fee in basis points (default: 500)
//! - `CM_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: info)

use std::str::FromStr;

use commons_market_core::Cents;
use commons_market_core::pricing::PricingPolicy;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Pricing used for cart totals and checkout
    pub pricing: PricingPolicy,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tax_rate_bps = parse_or_default(
            &lookup,
            "CM_TAX_RATE_BPS",
            PricingPolicy::DEFAULT_TAX_RATE_BPS,
        )?;
        let flat_shipping = parse_or_default(
            &lookup,
            "CM_FLAT_SHIPPING_CENTS",
            PricingPolicy::DEFAULT_FLAT_SHIPPING.get(),
        )?;
        let free_shipping_threshold = match lookup("CM_FREE_SHIPPING_THRESHOLD_CENTS") {
            Some(value) if value.trim().eq_ignore_ascii_case("none") => None,
            Some(value) => Some(parse_value::<i64>("CM_FREE_SHIPPING_THRESHOLD_CENTS", &value)?),
            None => Some(PricingPolicy::DEFAULT_FREE_SHIPPING_THRESHOLD.get()),
        };
        let platform_fee_bps = parse_or_default(
            &lookup,
            "CM_PLATFORM_FEE_BPS",
            PricingPolicy::DEFAULT_PLATFORM_FEE_BPS,
        )?;
        let log_format = lookup("CM_LOG_FORMAT")
            .map(|value| parse_value::<LogFormat>("CM_LOG_FORMAT", &value))
            .transpose()?
            .unwrap_or_default();

        if flat_shipping < 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CM_FLAT_SHIPPING_CENTS".to_string(),
                "must not be negative".to_string(),
            ));
        }

        Ok(Self {
            pricing: PricingPolicy {
                tax_rate_bps,
                flat_shipping: Cents::new(flat_shipping),
                free_shipping_threshold: free_shipping_threshold.map(Cents::new),
                platform_fee_bps,
            },
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when unset.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    lookup(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
