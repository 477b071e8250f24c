//! Booking commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use vdesk_core::booking::model::BookingStatus;
use vdesk_core::booking::status_counts;
use vdesk_core::query::{filter_by_status, StatusFilter};

use super::Session;
use crate::output;

#[derive(Subcommand)]
pub enum BookingCommands {
    /// List bookings, optionally filtered by status
    List(ListBookingsArgs),

    /// Confirm a booking
    Confirm {
        /// Booking ID
        id: String,
    },

    /// Cancel a booking
    Cancel {
        /// Booking ID
        id: String,
    },
}

#[derive(Args)]
pub struct ListBookingsArgs {
    /// Status filter (all, Confirmed, Pending, Cancelled)
    #[arg(long, default_value = "all")]
    pub status: StatusFilter<BookingStatus>,
}

pub fn execute(cmd: BookingCommands, session: &mut Session) -> Result<()> {
    match cmd {
        BookingCommands::List(args) => {
            let found = filter_by_status(session.store.bookings(), args.status);
            if session.json {
                return output::print_json(&found);
            }
            output::print_status_chips(&status_counts(session.store.bookings()), args.status);
            output::print_bookings_table(&found);
        }

        BookingCommands::Confirm { id } => set_status(session, &id, BookingStatus::Confirmed),

        BookingCommands::Cancel { id } => set_status(session, &id, BookingStatus::Cancelled),
    }

    Ok(())
}

fn set_status(session: &mut Session, id: &str, status: BookingStatus) {
    if session.store.update_booking_status(id, status) {
        println!(
            "{} Booking {} is now {}",
            "✓".green().bold(),
            id.dimmed(),
            output::booking_status_colored(status)
        );
    } else {
        output::print_not_found("booking", id);
    }
}
