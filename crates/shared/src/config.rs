//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Default tax and markup settings applied when a request does not override them.
    #[serde(default)]
    pub tax: TaxSettings,
    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Default tax settings.
///
/// Rates are percentages: `11` means 11%.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSettings {
    /// Add PPN (VAT) on top of the pre-tax total.
    #[serde(default = "default_true")]
    pub include_vat: bool,
    /// PPN rate.
    #[serde(default = "default_vat_rate")]
    pub vat_rate: Decimal,
    /// Report PPh 23 withholding on the labor bucket.
    #[serde(default = "default_true")]
    pub include_withholding: bool,
    /// PPh 23 rate.
    #[serde(default = "default_withholding_rate")]
    pub withholding_rate: Decimal,
    /// Contingency buffer applied to the subtotal.
    #[serde(default = "default_contingency_rate")]
    pub contingency_rate: Decimal,
}

fn default_true() -> bool {
    true
}

fn default_vat_rate() -> Decimal {
    Decimal::from(11)
}

fn default_withholding_rate() -> Decimal {
    Decimal::from(2)
}

fn default_contingency_rate() -> Decimal {
    Decimal::from(5)
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            include_vat: true,
            vat_rate: default_vat_rate(),
            include_withholding: true,
            withholding_rate: default_withholding_rate(),
            contingency_rate: default_contingency_rate(),
        }
    }
}

/// Presentation configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when rendering amounts in reports.
    #[serde(default)]
    pub currency: Currency,
}

impl AppConfig {
    /// Loads configuration from config files and `RAB__`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RAB").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
