//! Event commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use vdesk_core::event::model::EventStatus;
use vdesk_core::event::EventDraft;
use vdesk_core::query::{search_with_status, StatusFilter};

use super::Session;
use crate::output;

#[derive(Subcommand)]
pub enum EventCommands {
    /// List events, optionally filtered by title/date and status
    List(ListEventsArgs),

    /// Create a new event
    New(NewEventArgs),

    /// Delete an event
    Delete {
        /// Event ID
        id: String,
    },
}

#[derive(Args)]
pub struct ListEventsArgs {
    /// Text matched against the title (any case) and the DDMMYYYY date
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Status filter (all, active, past, deactivated)
    #[arg(long, default_value = "all")]
    pub status: StatusFilter<EventStatus>,
}

#[derive(Args)]
pub struct NewEventArgs {
    /// Event title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Event date as DDMMYYYY
    #[arg(long, default_value = "")]
    pub date: String,

    /// Start time, e.g. 21:00
    #[arg(long, default_value = "")]
    pub start_time: String,

    /// Ticket price, e.g. ₹1500
    #[arg(long, default_value = "")]
    pub price: String,

    /// Maximum number of bookings
    #[arg(long, default_value = "")]
    pub booking_limit: String,

    /// Event description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Save as a draft instead of publishing
    #[arg(long)]
    pub unpublished: bool,
}

impl From<NewEventArgs> for EventDraft {
    fn from(args: NewEventArgs) -> Self {
        Self {
            title: args.title,
            date: args.date,
            start_time: args.start_time,
            price: args.price,
            booking_limit: args.booking_limit,
            description: args.description,
            published: !args.unpublished,
        }
    }
}

pub fn execute(cmd: EventCommands, session: &mut Session) -> Result<()> {
    match cmd {
        EventCommands::List(args) => {
            let found = search_with_status(session.store.events(), &args.search, args.status);
            if session.json {
                return output::print_json(&found);
            }
            output::print_events_table(&found);
        }

        EventCommands::New(args) => {
            let event = session.store.create_event(&args.into())?;
            if session.json {
                return output::print_json(&event);
            }
            println!(
                "{} Created event: {} ({})",
                "✓".green().bold(),
                event.title.cyan(),
                event.id.dimmed()
            );
            output::print_events_table(&search_with_status(session.store.events(), "", StatusFilter::All));
        }

        EventCommands::Delete { id } => {
            if session.store.delete_event(&id) == 0 {
                output::print_not_found("event", &id);
            } else {
                println!("{} Deleted event {}", "✓".green().bold(), id.dimmed());
            }
        }
    }

    Ok(())
}
