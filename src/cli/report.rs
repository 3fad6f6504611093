//! CLI commands for reports

use clap::Subcommand;

use super::parse_period;
use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::DEFAULT_FORECAST_MONTHS;
use crate::services::{BudgetService, ReportService};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses and budget vs actual for one month
    Summary {
        /// Budget period (e.g., "2025-01"; defaults to this month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Income, expenses and net for every month on record
    History,

    /// Project savings from the average month on record
    Forecast {
        /// Number of months to project
        #[arg(short, long, default_value_t = DEFAULT_FORECAST_MONTHS,
              value_parser = clap::value_parser!(u32).range(1..=600))]
        months: u32,
    },

    /// A user's monthly budget report, also written as JSON
    Monthly {
        /// Username (defaults to the active user in settings)
        username: Option<String>,

        /// Budget period (e.g., "2025-01"; defaults to this month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Suggest a 50/30/20 budget from the month's income and save it
    Budget {
        /// Budget period (e.g., "2025-01"; defaults to this month)
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let service = ReportService::new(storage);

    match cmd {
        ReportCommands::Summary { period } => {
            let period = parse_period(period.as_deref())?;
            let summary = service.summary(period);
            print!("{}", summary.format_terminal());
            if summary.is_empty() {
                println!("\nNo income or expenses recorded for this month.");
            }
        }

        ReportCommands::History => {
            let history = service.history();
            if history.is_empty() {
                println!("No income or expenses recorded yet.");
            } else {
                print!("{}", history.format_terminal());
            }
        }

        ReportCommands::Forecast { months } => {
            print!("{}", service.forecast(months).format_terminal());
        }

        ReportCommands::Monthly { username, period } => {
            let username = username
                .or_else(|| settings.username.clone())
                .ok_or_else(|| {
                    BudgetError::Validation(
                        "No username given and no active user configured".to_string(),
                    )
                })?;
            let period = parse_period(period.as_deref())?;

            let report = service.analyze(&username, period)?;
            print!("{}", report.format_terminal());

            let (_, path) = service.export_monthly(&report)?;
            println!("\nReport saved to: {}", path.display());
        }

        ReportCommands::Budget { period } => {
            let period = parse_period(period.as_deref())?;
            let suggestion = BudgetService::new(storage).suggest(period)?;
            print!("{}", suggestion.format_terminal());
            println!("\nBudget plan saved.");
        }
    }

    Ok(())
}
