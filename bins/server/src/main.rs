//! Invoicer API Server
//!
//! Main entry point for the Invoicer backend service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoicer_api::{AppState, create_router};
use invoicer_core::billing::BillingRules;
use invoicer_shared::AppConfig;
use invoicer_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invoicer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let rules = BillingRules::from_config(&config.billing).context("Invalid billing settings")?;
    info!(
        tax_rate = %rules.tax.rate(),
        currency = %rules.currency,
        payment_terms_days = rules.payment_terms_days,
        invoice_prefix = %rules.invoice_prefix,
        quote_prefix = %rules.quote_prefix,
        "Billing rules loaded"
    );

    // Build the in-memory store
    let store = Store::from_config(&config.store, rules).context("Failed to load demo data")?;

    // Create router
    let app = create_router(AppState::new(store));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
