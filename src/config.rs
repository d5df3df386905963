//! Configuration

use std::path::PathBuf;

use clap::Args;
use jiff::tz::TimeZone;
use thiserror::Error;

use crate::{
    availability::Schedule,
    order::{Checkout, OrderLinkBuilder},
};

/// Errors that can occur when resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured time zone isn't in the time zone database.
    #[error("unknown time zone {name}")]
    UnknownTimeZone {
        /// Configured zone name
        name: String,

        /// Lookup error
        #[source]
        source: jiff::Error,
    },
}

/// Storefront settings.
#[derive(Clone, Debug, Args)]
pub struct StoreConfig {
    /// IANA time zone the opening hours are given in
    #[arg(long, env = "PIZZERIA_TIMEZONE", default_value = "America/Sao_Paulo")]
    pub timezone: String,

    /// `WhatsApp` number that receives orders
    #[arg(long, env = "PIZZERIA_WHATSAPP_NUMBER", default_value = "5511992596860")]
    pub whatsapp_number: String,

    /// Base URL the number and order text are appended to
    #[arg(long, env = "PIZZERIA_ORDER_BASE_URL", default_value = "https://wa.me/")]
    pub order_base_url: String,

    /// Catalog YAML file
    #[arg(long, env = "PIZZERIA_CATALOG", default_value = "fixtures/menu.yml")]
    pub catalog: PathBuf,

    /// Preference file
    #[arg(
        long,
        env = "PIZZERIA_PREFERENCES",
        default_value = ".pizzeria-preferences.yml"
    )]
    pub preferences: PathBuf,
}

impl StoreConfig {
    /// Resolve the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTimeZone`] if the zone can't be found.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        TimeZone::get(&self.timezone).map_err(|source| ConfigError::UnknownTimeZone {
            name: self.timezone.clone(),
            source,
        })
    }

    /// Builder for order links to the configured number.
    pub fn link_builder(&self) -> OrderLinkBuilder {
        OrderLinkBuilder::new(&self.order_base_url, &self.whatsapp_number)
    }

    /// Checkout using the standard weekly schedule.
    pub fn checkout(&self) -> Checkout {
        Checkout::new(Schedule::standard(), self.link_builder())
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Clone, Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        store: StoreConfig,

        #[command(flatten)]
        logging: LoggingConfig,
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let cli = TestCli::try_parse_from([
            "pizzeria",
            "--whatsapp-number",
            "5511000000000",
            "--order-base-url",
            "https://example.test/",
            "--log-format",
            "json",
        ])?;

        assert_eq!(
            cli.store.link_builder().link("oi").as_str(),
            "https://example.test/5511000000000?text=oi"
        );
        assert_eq!(cli.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn unknown_time_zone_is_an_error() -> TestResult {
        let cli = TestCli::try_parse_from(["pizzeria", "--timezone", "Nowhere/Atlantis"])?;

        assert!(matches!(
            cli.store.time_zone(),
            Err(ConfigError::UnknownTimeZone { name, .. }) if name == "Nowhere/Atlantis"
        ));

        Ok(())
    }
}
