//! VenueDesk CLI
//!
//! Terminal front-end for managing venues, events, offers and bookings.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

const DEFAULT_LOG_FILTER: &str = "vdesk=info,vdesk_core=info";

/// Initialize tracing on stderr so rendered output on stdout stays clean.
///
/// `RUST_LOG` wins over `--log-filter`, which wins over the built-in default.
fn init_tracing(log_filter: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(log_filter.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_filter.as_deref());
    if cli.no_color {
        colored::control::set_override(false);
    }

    cli.execute()
}
