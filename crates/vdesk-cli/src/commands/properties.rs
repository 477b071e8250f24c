//! Property commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use vdesk_core::query::search;

use super::Session;
use crate::output;

#[derive(Subcommand)]
pub enum PropertyCommands {
    /// List properties, optionally filtered by name or location
    List(ListPropertiesArgs),

    /// Show a single property
    Show {
        /// Property ID
        id: String,
    },

    /// Delete a property
    Delete {
        /// Property ID
        id: String,
    },
}

#[derive(Args)]
pub struct ListPropertiesArgs {
    /// Case-insensitive text matched against name and location
    #[arg(short, long, default_value = "")]
    pub search: String,
}

pub fn execute(cmd: PropertyCommands, session: &mut Session) -> Result<()> {
    match cmd {
        PropertyCommands::List(args) => {
            let found = search(session.store.properties(), &args.search);
            if session.json {
                return output::print_json(&found);
            }
            output::print_properties_table(&found);
        }

        PropertyCommands::Show { id } => match session.store.property(&id) {
            Some(property) if session.json => output::print_json(property)?,
            Some(property) => output::print_property(property),
            None => output::print_not_found("property", &id),
        },

        PropertyCommands::Delete { id } => {
            if session.store.delete_property(&id) == 0 {
                output::print_not_found("property", &id);
            } else {
                println!("{} Deleted property {}", "✓".green().bold(), id.dimmed());
                output::print_properties_table(&search(session.store.properties(), ""));
            }
        }
    }

    Ok(())
}
