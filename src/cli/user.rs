//! User management CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::{format_user_details, format_user_list};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::{tax, NewUser, UserService};
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Create {
        /// Username (unique, case-insensitive)
        username: String,

        /// US state of residence (e.g., "Texas")
        #[arg(short, long)]
        state: Option<String>,

        /// Six-digit user id (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Gross monthly income
        #[arg(short, long, allow_hyphen_values = true)]
        income: Option<String>,

        /// Flat tax rate, as "0.2" or "20%" (defaults to the configured rate)
        #[arg(short, long, allow_hyphen_values = true)]
        tax_rate: Option<String>,
    },

    /// Change a user's name, keeping their id
    Rename {
        /// Current username
        old: String,
        /// New username
        new: String,
    },

    /// Show a user and their profile
    Show {
        username: String,
    },

    /// List all users
    List,

    /// Delete a user and their profile
    Delete {
        username: String,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UserCommands,
) -> BudgetResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Create {
            username,
            state,
            id,
            income,
            tax_rate,
        } => {
            let income = match income {
                Some(s) => parse_amount(&s)?,
                None => Money::zero(),
            };
            let tax_rate = match tax_rate {
                Some(s) => tax::parse_rate(&s)?,
                None => settings.default_tax_rate,
            };

            let user = service.create(NewUser {
                username,
                state,
                user_id: id,
                income,
                tax_rate,
            })?;
            println!("Created user '{}' with id {}", user.username, user.user_id);
        }

        UserCommands::Rename { old, new } => {
            let user = service.rename(&old, &new)?;
            println!("Renamed '{}' to '{}'", old.trim(), user.username);
        }

        UserCommands::Show { username } => {
            let user = service.get(&username)?;
            let profile = service.profile(&user.username)?;
            print!("{}", format_user_details(&user, profile.as_ref()));
        }

        UserCommands::List => {
            let with_profile = service.profile_names()?;
            print!("{}", format_user_list(&service.list(), &with_profile));
        }

        UserCommands::Delete { username } => {
            let user = service.delete(&username)?;
            println!("Deleted user '{}'", user.username);
        }
    }

    Ok(())
}
