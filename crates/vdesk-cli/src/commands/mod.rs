//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use vdesk_core::date::{require_date, today_string};
use vdesk_core::DomainStore;

use crate::output;

pub mod bookings;
pub mod events;
pub mod offers;
pub mod profile;
pub mod properties;

/// VenueDesk - venue, event and offer management for business owners
#[derive(Parser)]
#[command(name = "vdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Render results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "VDESK_NO_COLOR")]
    pub no_color: bool,

    /// Tracing filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true, env = "VDESK_LOG")]
    pub log_filter: Option<String>,

    /// Date to treat as today, as DDMMYYYY (defaults to the local clock)
    #[arg(long, global = true, env = "VDESK_TODAY")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Overview of all venues, events, offers and bookings
    Dashboard,

    /// Manage properties
    #[command(subcommand)]
    Properties(properties::PropertyCommands),

    /// Manage events
    #[command(subcommand)]
    Events(events::EventCommands),

    /// Manage offers
    #[command(subcommand)]
    Offers(offers::OfferCommands),

    /// Review and act on bookings
    #[command(subcommand)]
    Bookings(bookings::BookingCommands),

    /// Show or edit the business profile
    #[command(subcommand)]
    Profile(profile::ProfileCommands),
}

/// Everything a command needs: the session's store and render settings.
pub struct Session {
    pub store: DomainStore,
    pub today: String,
    pub json: bool,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let today = match self.today {
            Some(today) => {
                require_date(&today)?;
                today
            }
            None => today_string(),
        };

        let mut session = Session {
            store: DomainStore::seeded(),
            today,
            json: self.json,
        };
        debug!(today = %session.today, "session started with seed data");

        let result = match self.command.unwrap_or(Commands::Dashboard) {
            Commands::Dashboard => dashboard(&session),
            Commands::Properties(cmd) => properties::execute(cmd, &mut session),
            Commands::Events(cmd) => events::execute(cmd, &mut session),
            Commands::Offers(cmd) => offers::execute(cmd, &mut session),
            Commands::Bookings(cmd) => bookings::execute(cmd, &mut session),
            Commands::Profile(cmd) => profile::execute(cmd, &mut session),
        };

        debug!("session closed, in-memory state discarded");
        result
    }
}

fn dashboard(session: &Session) -> Result<()> {
    if session.json {
        println!("{}", session.store.snapshot().to_json()?);
        return Ok(());
    }
    output::print_dashboard(&session.store, &session.today);
    Ok(())
}
