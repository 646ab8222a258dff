use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use eztip::calculator::ServiceTierKind;
use eztip::config::Config;
use eztip::history::HistoryStore;
use eztip::ui::{TipForm, shell};

#[derive(Parser)]
#[command(name = "eztip", version, about = "Tip calculator with a session history")]
struct Cli {
    /// Path to a config file (defaults to <config dir>/eztip/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate one total and print it
    Calc {
        /// Bill amount as typed
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        bill: String,

        /// Service tier: good, great, awesome or custom
        #[arg(long)]
        tier: Option<ServiceTierKind>,

        /// Custom tip percentage (used with --tier custom)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        custom: String,

        /// Restaurant name
        #[arg(long, default_value = "")]
        name: String,

        /// Restaurant location
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Start an interactive session (default)
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Calc {
            bill,
            tier,
            custom,
            name,
            location,
        } => {
            let mut form = TipForm::new();
            form.restaurant_name = name;
            form.restaurant_location = location;
            form.bill_amount = bill;
            form.custom_tip_percentage = custom;
            if let Some(tier) = tier {
                form.select_tier(tier);
            }

            let mut history = HistoryStore::new();
            let submission = form.submit(&mut history);
            println!(
                "Total Bill: {}{}",
                config.currency_symbol,
                submission.result.display_total()
            );

            if let Some(record) = submission.recorded.and_then(|id| history.get(id)) {
                println!();
                for line in record.display_lines(&config.currency_symbol, &config.date_format) {
                    println!("{}", line);
                }
            }
        }
        Command::Shell => shell::run(config).context("Interactive session failed")?,
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("eztip={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
