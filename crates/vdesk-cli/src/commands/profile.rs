//! Profile commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use vdesk_core::profile::model::ProfileUpdate;

use super::Session;
use crate::output;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the business profile
    Show,

    /// Update some profile fields, keeping the rest
    Set(SetProfileArgs),
}

#[derive(Args)]
pub struct SetProfileArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// National ID reference
    #[arg(long)]
    pub national_id: Option<String>,

    #[arg(long)]
    pub business_id: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

impl From<SetProfileArgs> for ProfileUpdate {
    fn from(args: SetProfileArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            national_id: args.national_id,
            business_id: args.business_id,
            address: args.address,
            company_verified: None,
        }
    }
}

pub fn execute(cmd: ProfileCommands, session: &mut Session) -> Result<()> {
    match cmd {
        ProfileCommands::Show => {
            if session.json {
                return output::print_json(session.store.profile());
            }
            output::print_profile(session.store.profile());
        }

        ProfileCommands::Set(args) => {
            let update = ProfileUpdate::from(args);
            if update.is_empty() {
                println!("{}", "Nothing to update.".dimmed());
                return Ok(());
            }
            session.store.update_profile(update);
            if session.json {
                return output::print_json(session.store.profile());
            }
            println!("{} Profile updated", "✓".green().bold());
            output::print_profile(session.store.profile());
        }
    }

    Ok(())
}
