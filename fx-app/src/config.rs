//! Configuration loading from environment.

use std::collections::HashSet;
use std::env;

use fx_types::UserId;

/// Which rate-acquisition strategy to run with.
#[derive(Debug)]
pub enum RateProviderConfig {
    /// Constant configured rate; the validator enforces the supported set.
    Fixed { rate: f64 },
    /// External rate service; currency support is the provider's call.
    Live {
        base_url: String,
        access_key: String,
        base_currency: String,
    },
}

/// Application configuration, read once at startup.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub provider: RateProviderConfig,
    pub allowed_users: HashSet<UserId>,
    pub supported_currencies: HashSet<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let provider = match env::var("RATE_PROVIDER")
            .unwrap_or_else(|_| "fixed".to_string())
            .as_str()
        {
            "fixed" => RateProviderConfig::Fixed {
                rate: env::var("FIXED_RATE")
                    .unwrap_or_else(|_| "1.2".to_string())
                    .parse()?,
            },
            "live" => RateProviderConfig::Live {
                base_url: env::var("EXCHANGE_API_URL").map_err(|_| {
                    anyhow::anyhow!("EXCHANGE_API_URL is required when RATE_PROVIDER=live")
                })?,
                access_key: env::var("EXCHANGE_API_KEY").map_err(|_| {
                    anyhow::anyhow!("EXCHANGE_API_KEY is required when RATE_PROVIDER=live")
                })?,
                base_currency: env::var("EXCHANGE_API_BASE")
                    .unwrap_or_else(|_| "EUR".to_string()),
            },
            other => anyhow::bail!("unknown RATE_PROVIDER '{other}', expected 'fixed' or 'live'"),
        };

        let allowed_users = env::var("ALLOWED_USERS")
            .unwrap_or_else(|_| "1,2".to_string())
            .split(',')
            .map(|s| {
                s.trim()
                    .parse::<UserId>()
                    .map_err(|e| anyhow::anyhow!("bad ALLOWED_USERS entry '{s}': {e}"))
            })
            .collect::<anyhow::Result<HashSet<_>>>()?;

        let supported_currencies = env::var("SUPPORTED_CURRENCIES")
            .unwrap_or_else(|_| "BRL,USD,EUR,JPY".to_string())
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .collect();

        Ok(Self {
            port,
            database_url,
            provider,
            allowed_users,
            supported_currencies,
        })
    }
}
