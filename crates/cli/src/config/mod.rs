//! CLI configuration module

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use estates_app::config::StoreConfig;

use crate::config::logging::LoggingConfig;

pub(crate) mod logging;

pub(crate) use logging::LogFormat;

/// Estates admin dashboard command line
#[derive(Debug, Parser)]
#[command(name = "estates-cli", about = "Estates admin dashboard CLI", long_about = None)]
pub(crate) struct CliConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// In-memory store settings.
    #[command(flatten)]
    pub store: StoreConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Log in, replay a fixture through the dashboard forms and print the result
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// YAML fixture listing people and buildings
    #[arg(long)]
    pub fixture: PathBuf,

    /// Dashboard username
    #[arg(long, env = "ESTATES_USERNAME", default_value = "admin")]
    pub username: String,

    /// Dashboard password
    #[arg(long, env = "ESTATES_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn seed_arguments_parse_with_defaults() -> TestResult {
        let config = CliConfig::try_parse_from([
            "estates-cli",
            "seed",
            "--fixture",
            "fixtures/demo.yml",
            "--password",
            "admin",
        ])?;

        let Command::Seed(args) = config.command;

        assert_eq!(args.fixture, PathBuf::from("fixtures/demo.yml"));
        assert_eq!(args.password, "admin");
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn latency_flags_override_defaults() -> TestResult {
        let config = CliConfig::try_parse_from([
            "estates-cli",
            "--save-latency-ms",
            "0",
            "--login-latency-ms",
            "0",
            "--log-format",
            "json",
            "seed",
            "--fixture",
            "demo.yml",
            "--password",
            "admin",
        ])?;

        assert_eq!(config.store.save_latency_ms, 0);
        assert_eq!(config.store.login_latency_ms, 0);
        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn seed_requires_a_fixture() {
        let result =
            CliConfig::try_parse_from(["estates-cli", "seed", "--password", "admin"]);

        assert!(result.is_err(), "missing --fixture should be rejected");
    }
}
