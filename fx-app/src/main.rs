//! # FX Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the SQLite store adapter
//! - Pick the rate-provider strategy
//! - Create the conversion service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fx_hex::{ConversionService, inbound::HttpServer};
use fx_rates::RateSource;
use fx_store::build_store;
use fx_types::ConversionValidator;

use config::RateProviderConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fx_app=debug,fx_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting conversion server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);

    // Build store (handles connection and migration)
    let store = build_store(&config.database_url).await?;

    // Pick the rate strategy. With a fixed rate the validator owns the
    // supported-currency check; a live provider is the authority itself.
    let (provider, supported) = match config.provider {
        RateProviderConfig::Fixed { rate } => {
            tracing::info!("Rate provider: fixed rate {rate}");
            (RateSource::fixed(rate), Some(config.supported_currencies))
        }
        RateProviderConfig::Live {
            base_url,
            access_key,
            base_currency,
        } => {
            tracing::info!("Rate provider: live, base currency {base_currency}");
            (RateSource::live(base_url, access_key, base_currency), None)
        }
    };

    let validator = ConversionValidator::new(config.allowed_users, supported);

    // Create the conversion service
    let service = ConversionService::new(store, provider, validator);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
