//! Command-line front end: argument parsing, dispatch, and text reports.

pub mod messages;
pub mod output;
pub mod table;

use std::env;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::{
    config::{Config, ConfigManager},
    core::{
        errors::{CliError, ExpenseError},
        services::{ExpenseSummary, HistoryRow, SummaryService},
        Clock, FixedClock, InputValidator, RawExpense, SystemClock,
    },
    storage::{JsonStorage, StorageBackend},
};

use self::{
    output::format_currency,
    table::{Table, TableColumn},
};

const TODAY_ENV: &str = "EXPENSE_CORE_TODAY";
const DESCRIPTION_WIDTH: usize = 32;

/// A simple CLI expense tracker.
#[derive(Debug, Parser)]
#[command(name = "expense_cli", version, arg_required_else_help = true)]
pub struct Args {
    /// Add an expense, e.g. `-e 250 food -r monthly -d "Groceries"`
    #[arg(
        short = 'e',
        long,
        num_args = 2,
        value_names = ["AMOUNT", "CATEGORY"],
        allow_hyphen_values = true
    )]
    pub expense: Option<Vec<String>>,

    /// Recurrence frequency: daily, weekly, monthly, yearly
    #[arg(short = 'r', long, requires = "expense")]
    pub recurrence: Option<String>,

    /// Start of the recurrence (YYYY-MM-DD); defaults to today
    #[arg(long = "start-date", visible_alias = "sd", requires = "recurrence")]
    pub start_date: Option<String>,

    /// End of the recurrence (YYYY-MM-DD); open-ended when omitted
    #[arg(long = "end-date", visible_alias = "ed", requires = "recurrence")]
    pub end_date: Option<String>,

    /// Optional description for the expense
    #[arg(short = 'd', long, requires = "expense")]
    pub description: Option<String>,

    /// Remove the expense with this ID
    #[arg(long, visible_alias = "rm", value_name = "ID")]
    pub remove: Option<u64>,

    /// Show accrued totals per category
    #[arg(short = 's', long)]
    pub summary: bool,

    /// Show every recorded expense
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Collaborators a CLI invocation runs against.
pub struct App {
    pub config: Config,
    pub storage: Box<dyn StorageBackend>,
    pub clock: Box<dyn Clock>,
}

impl App {
    /// Wires configuration, storage, and clock from the environment.
    pub fn from_env() -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let storage = JsonStorage::at_path(config.store_path(manager.base_dir()))?;
        info!(store = %storage.path().display(), "opened expense store");
        Ok(Self {
            config,
            storage: Box::new(storage),
            clock: clock_from_env()?,
        })
    }
}

fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) => {
            let date = InputValidator::parse_date(&raw)?.ok_or_else(|| {
                CliError::Input(format!("{TODAY_ENV} must be a YYYY-MM-DD date"))
            })?;
            debug!(%date, "using pinned reference date");
            Ok(Box::new(FixedClock::new(date)))
        }
        Err(_) => Ok(Box::new(SystemClock)),
    }
}

/// Parses process arguments and runs them against the default environment.
pub fn run_cli() -> Result<(), CliError> {
    let args = Args::parse();
    crate::init(args.verbose);
    let app = App::from_env()?;
    run(&args, &app)
}

/// Executes the requested actions in order: add, remove, list, summary.
///
/// A failing action is reported and the remaining ones still run; the
/// overall result fails if any action did.
pub fn run(args: &Args, app: &App) -> Result<(), CliError> {
    let mut failed = 0usize;
    let mut report = |action: &str, result: Result<(), CliError>| {
        if let Err(err) = result {
            warn!(action, error = %err, "action failed");
            output::error(format!("Error: {err}"));
            failed += 1;
        }
    };

    if let Some(expense) = &args.expense {
        report("add", add_expense(args, expense, app));
    }
    if let Some(id) = args.remove {
        report("remove", remove_expense(id, app));
    }
    if args.all {
        report("history", show_history(app));
    }
    if args.summary {
        report("summary", show_summary(app));
    }

    if failed > 0 {
        return Err(CliError::ActionsFailed(failed));
    }
    Ok(())
}

fn add_expense(args: &Args, expense: &[String], app: &App) -> Result<(), CliError> {
    let [amount, category] = expense else {
        return Err(CliError::Input("--expense takes AMOUNT and CATEGORY".into()));
    };
    let today = app.clock.today();
    let raw = RawExpense {
        amount: amount.as_str(),
        category: category.as_str(),
        recurrence: args.recurrence.as_deref(),
        start_date: args.start_date.as_deref(),
        end_date: args.end_date.as_deref(),
        description: args.description.as_deref(),
    };
    let record = InputValidator::build(&raw, today)?;
    let total = record.total_amount(today)?;
    let stored = app.storage.add(record)?;
    output::success(messages::added_message(
        stored.record.category,
        &format_currency(&app.config.currency_symbol, total),
    ));
    output::info(format!("Saved as ID {}.", stored.id));
    Ok(())
}

fn remove_expense(id: u64, app: &App) -> Result<(), CliError> {
    let removed = app.storage.remove(id)?;
    output::success(messages::removed_message(removed));
    Ok(())
}

fn show_history(app: &App) -> Result<(), CliError> {
    match SummaryService::history(&app.storage.list()?, app.clock.today()) {
        Ok(rows) => {
            output::section("Expense History");
            println!("{}", history_table(&rows, &app.config.currency_symbol).render());
        }
        Err(ExpenseError::Empty) => output::warning("No expenses recorded yet."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn show_summary(app: &App) -> Result<(), CliError> {
    match SummaryService::summary(&app.storage.list()?, app.clock.today()) {
        Ok(summary) => {
            output::section("Expense Summary");
            println!("{}", summary_table(&summary, &app.config.currency_symbol).render());
        }
        Err(ExpenseError::Empty) => output::warning("No expenses recorded yet."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn date_cell(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "N/A".to_string(), |d| d.to_string())
}

pub fn history_table(rows: &[HistoryRow], symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::right("Amount"),
        TableColumn::left("Category"),
        TableColumn::left("Date Added"),
        TableColumn::left("Recurrence"),
        TableColumn::left("Start Date"),
        TableColumn::left("End Date"),
        TableColumn::left("Description").max_width(DESCRIPTION_WIDTH),
        TableColumn::right("Accumulated"),
    ]);
    for row in rows {
        let record = &row.expense.record;
        table.push_row(vec![
            row.expense.id.to_string(),
            format_currency(symbol, record.base_amount),
            record.category.to_string(),
            record.date_added.to_string(),
            record.recurrence.to_string(),
            date_cell(record.start_date),
            date_cell(record.end_date),
            record.description.clone().unwrap_or_else(|| "N/A".into()),
            format_currency(symbol, row.accumulated),
        ]);
    }
    table
}

pub fn summary_table(summary: &ExpenseSummary, symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Share"),
        TableColumn::right("Total"),
    ]);
    for total in &summary.totals {
        table.push_row(vec![
            total.category.to_string(),
            format!("{:.1}%", total.share),
            format_currency(symbol, total.total),
        ]);
    }
    table.push_row(vec![
        "All".into(),
        "100.0%".into(),
        format_currency(symbol, summary.grand_total),
    ]);
    table
}
