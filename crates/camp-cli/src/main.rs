//! Camps CLI - command-line administration of the camp registry.

use camp_cli::commands;
use camp_cli::config::OutputFormat;
use camp_cli::{logging, Cli, Command, Config, Formatter};
use camp_store::SqliteStore;
use camp_validator::Validator;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(errors) = e.field_errors() {
            let formatter = Formatter::new(OutputFormat::Table, false);
            eprintln!("{}", formatter.field_errors(errors));
        }
        std::process::exit(1);
    }
}

fn run() -> camp_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config (defaults when the file is absent)
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log_level);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Config(action) => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::path()?,
            };
            commands::execute_config(action, &config, &path, &formatter)?;
        }
        Command::Curriculum(action) => {
            let mut store = open_store(cli.database, &config)?;
            commands::execute_curriculum(action, &mut store, &formatter)?;
        }
        Command::Location(action) => {
            let mut store = open_store(cli.database, &config)?;
            commands::execute_location(action, &mut store, &formatter)?;
        }
        Command::Camp(action) => {
            let mut store = open_store(cli.database, &config)?;
            commands::execute_camp(action, &mut store, &formatter)?;
        }
        Command::Instructor(action) => {
            let mut store = open_store(cli.database, &config)?;
            commands::execute_instructor(action, &mut store, &formatter)?;
        }
        Command::Assign(action) => {
            let mut store = open_store(cli.database, &config)?;
            commands::execute_assign(action, &mut store, &formatter)?;
        }
    }

    Ok(())
}

/// Open the store with the configured rules, creating the database directory.
fn open_store(database: Option<PathBuf>, config: &Config) -> camp_cli::Result<SqliteStore> {
    let db_path = match database {
        Some(path) => path,
        None => config.database_path()?,
    };
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    debug!("Using database {}", db_path.display());
    let validator = Validator::new(config.validation.clone())?;
    Ok(SqliteStore::with_validator(&db_path, validator)?)
}
