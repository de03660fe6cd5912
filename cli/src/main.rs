mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use entity::{Department, EmployeeDraft, Locale, Position, ViewMode};
use platform_obs::{ObsConfig, init_tracing};
use platform_storage::FileStorage;
use store::{AppStore, EmployeeStore, validate};
use tracing::info;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "crewdesk", version, about = "Employee directory manager")]
struct Cli {
    /// Directory holding the persisted records.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the employee list (current page of the current filter).
    List(ListCommand),
    /// Add a new employee.
    Add(EmployeeArgs),
    /// Update an existing employee.
    Update {
        id: String,
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    /// Delete an employee by id.
    Delete { id: String },
    /// Replace the collection with the demonstration dataset.
    Seed,
    /// Show or change the application locale.
    Locale {
        /// Locale code (en, tr). Omit to print the current locale.
        code: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ListCommand {
    /// Jump to this page (1-based).
    #[arg(long)]
    page: Option<usize>,
    /// Rows per page (5, 10, 20, or 50).
    #[arg(long)]
    per_page: Option<usize>,
    /// Filter by a case-insensitive substring; empty string clears it.
    #[arg(long)]
    search: Option<String>,
    /// Render as a table or a card list.
    #[arg(long)]
    view: Option<ViewMode>,
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    /// Analytics or Tech.
    #[arg(long)]
    department: Option<Department>,
    /// Junior, Medior, or Senior.
    #[arg(long)]
    position: Option<Position>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    date_of_employment: Option<NaiveDate>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    date_of_birth: Option<NaiveDate>,
}

impl From<EmployeeArgs> for EmployeeDraft {
    fn from(args: EmployeeArgs) -> Self {
        EmployeeDraft {
            first_name: args.first_name.unwrap_or_default(),
            last_name: args.last_name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
            department: args.department,
            position: args.position,
            date_of_employment: args.date_of_employment,
            date_of_birth: args.date_of_birth,
        }
    }
}

fn main() -> Result<ExitCode> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = AppConfig::load(cli.data_dir);

    match cli.command {
        Command::List(cmd) => run_list(&config, cmd),
        Command::Add(args) => run_add(&config, args.into()),
        Command::Update { id, fields } => run_update(&config, &id, fields.into()),
        Command::Delete { id } => run_delete(&config, &id),
        Command::Seed => run_seed(&config),
        Command::Locale { code } => run_locale(&config, code),
    }
}

fn open_employee_store(config: &AppConfig) -> Result<EmployeeStore> {
    Ok(EmployeeStore::load(Box::new(FileStorage::new(
        &config.data_dir,
    )))?)
}

fn open_app_store(config: &AppConfig) -> Result<AppStore> {
    Ok(AppStore::load(Box::new(FileStorage::new(
        &config.data_dir,
    )))?)
}

fn run_list(config: &AppConfig, cmd: ListCommand) -> Result<ExitCode> {
    let mut store = open_employee_store(config)?;
    let locale = open_app_store(config)?.locale();

    // search and page size reset the page, so apply the page override last
    if let Some(search) = cmd.search {
        store.set_search_query(search)?;
    }
    if let Some(per_page) = cmd.per_page {
        store.set_items_per_page(per_page)?;
    }
    if let Some(view) = cmd.view {
        store.set_view_mode(view)?;
    }
    if let Some(page) = cmd.page {
        store.set_page(page)?;
    }

    print!("{}", output::render_list(&store, locale));
    Ok(ExitCode::SUCCESS)
}

fn run_add(config: &AppConfig, draft: EmployeeDraft) -> Result<ExitCode> {
    let mut store = open_employee_store(config)?;
    let errors = validate::validate(&draft, &store, None);
    if !errors.is_valid() {
        report_errors(&errors);
        return Ok(ExitCode::FAILURE);
    }
    let employee = store.add(draft)?;
    info!(id = %employee.id, "employee added");
    println!(
        "Added {} {} ({})",
        employee.first_name, employee.last_name, employee.id
    );
    Ok(ExitCode::SUCCESS)
}

fn run_update(config: &AppConfig, id: &str, draft: EmployeeDraft) -> Result<ExitCode> {
    let mut store = open_employee_store(config)?;
    let errors = validate::validate(&draft, &store, Some(id));
    if !errors.is_valid() {
        report_errors(&errors);
        return Ok(ExitCode::FAILURE);
    }
    match store.update(id, draft)? {
        Some(employee) => {
            println!(
                "Updated {} {} ({})",
                employee.first_name, employee.last_name, employee.id
            );
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No employee with id {id}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_delete(config: &AppConfig, id: &str) -> Result<ExitCode> {
    let mut store = open_employee_store(config)?;
    match store.delete(id)? {
        Some(employee) => {
            println!("Deleted {} {}", employee.first_name, employee.last_name);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No employee with id {id}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_seed(config: &AppConfig) -> Result<ExitCode> {
    let mut store = open_employee_store(config)?;
    let count = store.seed()?;
    println!("Seeded {count} employees");
    Ok(ExitCode::SUCCESS)
}

fn run_locale(config: &AppConfig, code: Option<String>) -> Result<ExitCode> {
    let mut store = open_app_store(config)?;
    match code {
        None => {
            let current = store.locale();
            for locale in store.supported_locales() {
                let mark = if locale == current { "*" } else { " " };
                println!("{mark} {} ({})", locale.code(), locale.display_name());
            }
        }
        Some(code) => {
            // unsupported codes are silently ignored
            if let Some(locale) = Locale::from_code(&code) {
                store.set_locale(locale)?;
            }
            println!("{}", store.locale().code());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn report_errors(errors: &validate::ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("{field}: {message}");
    }
}
