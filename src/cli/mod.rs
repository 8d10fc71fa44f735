//! Command-line surface: argument parsing, context resolution and dispatch.

pub mod handlers;
pub mod output;
pub mod system_clock;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};

use cashflow_config::{Config, ConfigKey, ConfigManager};
use cashflow_core::Clock;
use cashflow_domain::{FlowKind, Month};
use cashflow_storage_json::JsonTransactionStore;

use crate::errors::CliError;
use output::Renderer;
use system_clock::SystemClock;

#[derive(Parser, Debug)]
#[command(name = "cashflow", version)]
#[command(about = "Personal cash flow ledger: record inflows and outflows, summarize a month")]
pub struct Cli {
    /// Transaction data file (also read from `CASHFLOW_DATA_FILE`).
    #[arg(long, global = true, env = "CASHFLOW_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Preferences file (also read from `CASHFLOW_CONFIG`).
    #[arg(long, global = true, env = "CASHFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit debug logs on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

const ADD_MONTHS_HELP: &str = "Months are given with flags, not positionally:\n  \
    cashflow add Vacation 500 outflow fun --month 2024-02\n  \
    cashflow add Salary 3000 inflow income --recurring --start-month 2024-01 [--end-month 2024-12]";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a cash flow item.
    #[command(after_help = ADD_MONTHS_HELP)]
    Add(AddArgs),
    /// List saved transactions.
    List(ListArgs),
    /// Show the cash flow summary for a month.
    Summary(SummaryArgs),
    /// Clear saved data.
    Reset,
    /// Show or change saved preferences.
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name of the inflow or outflow.
    pub description: String,
    /// Amount of money.
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    /// Whether this is money in or out (`inflow` or `outflow`).
    #[arg(value_name = "TYPE")]
    pub kind: FlowKind,
    /// Category label (e.g. rent, salary).
    pub category: String,
    /// Mark this as a recurring item.
    #[arg(long)]
    pub recurring: bool,
    /// Month for one-time items (YYYY-MM).
    #[arg(long)]
    pub month: Option<Month>,
    /// Start month for recurring items (YYYY-MM).
    #[arg(long)]
    pub start_month: Option<Month>,
    /// Optional last month for recurring items (YYYY-MM).
    #[arg(long)]
    pub end_month: Option<Month>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show transactions active in this month (YYYY-MM).
    #[arg(long)]
    pub month: Option<Month>,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (YYYY-MM). Defaults to the current month.
    pub month: Option<Month>,
    /// Starting balance for the month.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub opening_balance: f64,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the active preferences and where they are stored.
    Show,
    /// Update one preference (`currency-symbol`, `data-file`, `color`).
    Set { key: ConfigKey, value: String },
}

/// Resolved collaborators for a single invocation.
pub struct CliContext {
    pub config_manager: ConfigManager,
    pub config: Config,
    pub store: JsonTransactionStore,
    pub renderer: Renderer,
}

impl CliContext {
    /// Resolves the config file and the data file.
    ///
    /// The data file comes from `--data-file` / `CASHFLOW_DATA_FILE`, then the
    /// config, then `cashflow_data.json` in the working directory.
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let config_manager = match &cli.config {
            Some(path) => ConfigManager::new(path.clone()),
            None => ConfigManager::with_default_path(),
        };
        let config = config_manager.load()?;
        let data_file = cli
            .data_file
            .clone()
            .unwrap_or_else(|| config.resolve_data_file());
        tracing::debug!(
            config = %config_manager.config_path().display(),
            data_file = %data_file.display(),
            "resolved cli context"
        );
        let renderer = Renderer::from_config(&config);
        Ok(Self {
            config_manager,
            config,
            store: JsonTransactionStore::new(data_file),
            renderer,
        })
    }
}

/// Runs one parsed invocation against the real clock and stdout.
pub fn run_cli(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &SystemClock, &mut out)
}

/// Runs one parsed invocation, writing user-facing output to `out`.
pub fn run_with(cli: Cli, clock: &dyn Clock, out: &mut dyn Write) -> Result<(), CliError> {
    let mut context = CliContext::resolve(&cli)?;
    match cli.command {
        Command::Add(args) => handlers::add(&context, args, out),
        Command::List(args) => handlers::list(&context, args, out),
        Command::Summary(args) => handlers::summary(&context, args, clock, out),
        Command::Reset => handlers::reset(&context, out),
        Command::Config(args) => handlers::config(&mut context, args.command, out),
    }
}
