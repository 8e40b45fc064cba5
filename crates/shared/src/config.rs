//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// In-memory store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Billing rules (tax, terms, currency).
    #[serde(default)]
    pub billing: BillingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// In-memory store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Whether to load the demo clients, products, quotes and invoices at startup.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
    /// Artificial delay applied before each mutation, in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            simulated_latency_ms: 0,
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}

/// Billing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Flat tax rate applied to every document subtotal (0.20 = 20%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Currency used for all amounts.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Days between an invoice date and its due date.
    #[serde(default = "default_terms_days")]
    pub payment_terms_days: u32,
    /// Days a quote stays valid.
    #[serde(default = "default_terms_days")]
    pub quote_validity_days: u32,
    /// Prefix of invoice numbers.
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
    /// Prefix of quote numbers.
    #[serde(default = "default_quote_prefix")]
    pub quote_prefix: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            currency: default_currency(),
            payment_terms_days: default_terms_days(),
            quote_validity_days: default_terms_days(),
            invoice_prefix: default_invoice_prefix(),
            quote_prefix: default_quote_prefix(),
        }
    }
}

fn default_tax_rate() -> Decimal {
    Decimal::new(20, 2)
}

fn default_currency() -> Currency {
    Currency::Eur
}

fn default_terms_days() -> u32 {
    30
}

fn default_invoice_prefix() -> String {
    "INV".to_string()
}

fn default_quote_prefix() -> String {
    "DEV".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("INVOICER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
