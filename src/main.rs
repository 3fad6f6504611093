use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budgetbuddy::cli::{
    handle_expense_command, handle_export_command, handle_import_command, handle_income_command,
    handle_report_command, handle_restore_command, handle_tax_command, handle_user_command, ExpenseCommands,
    ExportCommands, IncomeCommands, ReportCommands, UserCommands,
};
use budgetbuddy::config::{paths::BudgetPaths, settings::Settings};
use budgetbuddy::error::BudgetError;
use budgetbuddy::services::{tax, RecordService};
use budgetbuddy::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Command-line personal budget and expense tracker",
    long_about = "BudgetBuddy records income and expenses, keeps per-user profiles \
                  and reports spending by category and month, after-tax balances \
                  and 50/30/20 budget suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show or change configuration
    Config {
        /// Set the active user
        #[arg(long)]
        user: Option<String>,

        /// Set the currency symbol
        #[arg(long)]
        currency: Option<String>,

        /// Set the default tax rate ("0.2" or "20%")
        #[arg(long)]
        tax_rate: Option<String>,

        /// Set the date format (strftime, e.g. "%Y-%m-%d")
        #[arg(long)]
        date_format: Option<String>,
    },

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Import expenses from a CSV file
    Import {
        /// CSV file with a date,description,amount,category header
        file: PathBuf,

        /// Import into this user's profile instead of the shared ledger
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Replace the ledger with a JSON or YAML export
    Restore {
        /// File written by `export json` or `export yaml`
        file: PathBuf,

        /// Confirm replacing the current ledger
        #[arg(long)]
        yes: bool,
    },

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Reports and budget suggestions
    #[command(subcommand)]
    Report(ReportCommands),

    /// Compute tax and net income for a gross amount
    Tax {
        /// Gross income
        #[arg(allow_hyphen_values = true)]
        gross: String,

        /// Flat tax rate, as "0.2" or "20%" (defaults to the configured rate)
        #[arg(allow_hyphen_values = true)]
        rate: Option<String>,
    },

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Delete all income, expenses and the budget plan
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing BudgetBuddy at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.ledger.save()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  budget income add 5000 Salary");
            println!("  budget expense add 45.20 Groceries \"Weekly shop\"");
            println!("  budget report summary");
        }
        Some(Commands::Config {
            user,
            currency,
            tax_rate,
            date_format,
        }) => {
            let changed =
                user.is_some() || currency.is_some() || tax_rate.is_some() || date_format.is_some();

            if let Some(user) = user {
                settings.username = Some(storage_user(&storage, &user)?);
            }
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(rate) = tax_rate {
                settings.default_tax_rate = tax::parse_rate(&rate)?;
            }
            if let Some(format) = date_format {
                settings.date_format = format;
            }
            if changed {
                settings.save(&paths)?;
                println!("Configuration updated.");
                println!();
            }

            println!("BudgetBuddy Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Users file:       {}", paths.users_file().display());
            println!("Profiles:         {}", paths.profiles_dir().display());
            println!("Reports:          {}", paths.reports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default tax rate: {}", settings.default_tax_rate);
            println!(
                "  Active user:      {}",
                settings.username.as_deref().unwrap_or("(none)")
            );
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Import { file, user }) => {
            handle_import_command(&storage, &file, user.as_deref())?;
        }
        Some(Commands::Restore { file, yes }) => {
            handle_restore_command(&storage, &file, yes)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Tax { gross, rate }) => {
            handle_tax_command(&gross, rate.as_deref(), &settings)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                return Err(BudgetError::Validation(
                    "Refusing to clear data without --yes".to_string(),
                )
                .into());
            }
            RecordService::new(&storage).clear()?;
            println!("All income, expenses and the budget plan have been cleared.");
        }
        None => {
            println!("BudgetBuddy - personal budget and expense tracker");
            println!();
            if !storage.is_initialized() {
                println!("No configuration found. Run 'budget init' to get started.");
            }
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}

/// Resolve a username against the user list, returning its stored spelling
fn storage_user(storage: &Storage, username: &str) -> Result<String> {
    storage
        .users
        .find(username)
        .map(|u| u.username)
        .ok_or_else(|| BudgetError::user_not_found(username.trim()).into())
}
