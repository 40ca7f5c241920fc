use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use habits::cli::args::{Cli, Commands};
use habits::cli::commands;
use habits::config::{Config, Paths};
use habits::logging;
use habits::storage::{Database, SqliteStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.home {
        Some(root) => Paths::with_root(root),
        None => Paths::new()?,
    };
    let config = Config::load_from_path(&paths.config_file)?;

    logging::init(cli.verbose, &config.general.log_level);
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);

    // Commands that never open the database.
    let output = match cli.command {
        Commands::Completions { shell } => commands::completions(shell)?,
        Commands::Config { init } => commands::config(&paths, init, format)?,
        command => {
            paths.ensure_dirs()?;
            debug!(path = %paths.database.display(), "opening database");
            let store = SqliteStore::new(Database::open_at(&paths.database)?);

            match command {
                Commands::Add {
                    name,
                    description,
                    frequency,
                } => commands::add(&store, &name, description.as_deref(), frequency, format)?,
                Commands::List => commands::list(&store, format)?,
                Commands::Show { habit, days } => commands::show(
                    &store,
                    &habit,
                    days.map_or(config.stats.history_days, usize::from),
                    format,
                )?,
                Commands::Done { habit } => commands::mark(&store, &habit, true, format)?,
                Commands::Undo { habit } => commands::mark(&store, &habit, false, format)?,
                Commands::Delete { habit } => commands::delete(&store, &habit, format)?,
                Commands::Stats => {
                    commands::stats(&store, config.stats.progress_bar_width, format)?
                }
                Commands::Completions { .. } | Commands::Config { .. } => String::new(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
