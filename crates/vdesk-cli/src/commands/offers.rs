//! Offer commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use vdesk_core::offer::model::{OfferStatus, DISCOUNT_PERCENT};
use vdesk_core::offer::OfferDraft;
use vdesk_core::query::{search_with_status, StatusFilter};

use super::Session;
use crate::output;

#[derive(Subcommand)]
pub enum OfferCommands {
    /// List offers, optionally filtered by name/dates and status
    List(ListOffersArgs),

    /// Create a new offer
    New(NewOfferArgs),

    /// Delete an offer
    Delete {
        /// Offer ID
        id: String,
    },
}

#[derive(Args)]
pub struct ListOffersArgs {
    /// Text matched against the name (any case) and both DDMMYYYY dates
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Status filter (all, active, deactivated)
    #[arg(long, default_value = "all")]
    pub status: StatusFilter<OfferStatus>,
}

#[derive(Args)]
pub struct NewOfferArgs {
    /// Offer name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Offer description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// First valid day as DDMMYYYY
    #[arg(long, default_value = "")]
    pub start_date: String,

    /// Last valid day as DDMMYYYY
    #[arg(long, default_value = "")]
    pub end_date: String,

    /// Discount type (%, Flat, BuyXGetY)
    #[arg(long, default_value = DISCOUNT_PERCENT)]
    pub discount_type: String,

    /// Discount amount
    #[arg(long, default_value = "")]
    pub amount: String,
}

impl From<NewOfferArgs> for OfferDraft {
    fn from(args: NewOfferArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            start_date: args.start_date,
            end_date: args.end_date,
            discount_type: args.discount_type,
            amount: args.amount,
        }
    }
}

pub fn execute(cmd: OfferCommands, session: &mut Session) -> Result<()> {
    match cmd {
        OfferCommands::List(args) => {
            let found = search_with_status(session.store.offers(), &args.search, args.status);
            if session.json {
                return output::print_json(&found);
            }
            output::print_offers_table(&found, &session.today);
        }

        OfferCommands::New(args) => {
            let offer = session.store.create_offer(&args.into())?;
            if session.json {
                return output::print_json(&offer);
            }
            println!(
                "{} Created offer: {} ({})",
                "✓".green().bold(),
                offer.name.cyan(),
                offer.id.dimmed()
            );
            output::print_offers_table(
                &search_with_status(session.store.offers(), "", StatusFilter::All),
                &session.today,
            );
        }

        OfferCommands::Delete { id } => {
            if session.store.delete_offer(&id) == 0 {
                output::print_not_found("offer", &id);
            } else {
                println!("{} Deleted offer {}", "✓".green().bold(), id.dimmed());
            }
        }
    }

    Ok(())
}
