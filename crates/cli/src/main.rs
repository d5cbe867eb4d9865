//! Estates admin dashboard CLI

use std::{io, process};

use tracing::{error, info};

use estates_app::{auth::Credentials, context::AppContext, dashboard::Dashboard};

use crate::{
    config::{CliConfig, Command, SeedArgs},
    seed::{SeedError, SeedFixture},
};

mod config;
mod observability;
mod report;
mod seed;

/// Estates CLI entry point
#[tokio::main]
pub async fn main() {
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    let dashboard = Dashboard::new(AppContext::in_memory(&config.store));

    let result = match config.command {
        Command::Seed(args) => seed(&dashboard, args).await,
    };

    if let Err(error) = result {
        error!(%error, "seed failed");

        process::exit(1);
    }
}

async fn seed(dashboard: &Dashboard, args: SeedArgs) -> Result<(), SeedError> {
    let session = seed::login(dashboard, Credentials::new(args.username, args.password)).await?;

    info!(username = %session.username, "logged in");

    let fixture = SeedFixture::load(&args.fixture)?;

    seed::replay(dashboard, fixture).await?;

    let buildings = dashboard.buildings().await;
    let people = dashboard.people().await;

    report::write_report(&mut io::stdout().lock(), &buildings, &people)?;

    Ok(())
}
