//! Timenow - Main Entry Point
//!
//! Exposes the `<provider>_now` data source to hosts that run data sources
//! as external programs.

mod cli;
mod commands;
mod logging;
mod settings;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use timenow_application::TimeNowDataSource;
use timenow_application::ports::Clock;
use timenow_infrastructure::{FixedClock, SystemClock};
use tracing::info;

use crate::cli::Cli;
use crate::settings::{Overrides, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref(), Overrides::from(&cli))
        .context("failed to load configuration")?;

    logging::init(&settings.log_level);
    info!(
        provider = %settings.provider,
        fixed = settings.fixed_time.is_some(),
        "timenow v{}",
        env!("CARGO_PKG_VERSION")
    );

    let clock: Box<dyn Clock> = match settings.fixed_time {
        Some(instant) => Box::new(FixedClock::new(instant)),
        None => Box::new(SystemClock::new()),
    };
    let source = TimeNowDataSource::new(clock);

    commands::run(
        cli.cmd.unwrap_or_default(),
        &source,
        &settings.provider,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}
