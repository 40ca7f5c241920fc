//! Configuration command implementation.

use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::HabitsError;
use crate::features::stats::render_summary_box;
use crate::output::to_json;

/// Execute config command.
///
/// With `init`, writes the default configuration when no file exists yet.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(paths: &Paths, init: bool, format: OutputFormat) -> Result<String, HabitsError> {
    let mut created = false;
    if init && !paths.config_file.exists() {
        paths.ensure_dirs()?;
        Config::default().save_to_path(&paths.config_file)?;
        info!(path = %paths.config_file.display(), "wrote default config");
        created = true;
    }

    let config = Config::load_from_path(&paths.config_file)?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => {
            let items = [
                ("Config file", paths.config_file.display().to_string()),
                ("Database", paths.database.display().to_string()),
                (
                    "Default output",
                    format!("{:?}", config.general.default_output).to_lowercase(),
                ),
                ("Color", format!("{:?}", config.general.color).to_lowercase()),
                ("Log level", config.general.log_level.clone()),
                ("History days", config.stats.history_days.to_string()),
                ("Progress bar", config.stats.progress_bar_width.to_string()),
            ];

            let mut output = render_summary_box("Configuration", &items);
            if created {
                output.push_str("\nCreated default config file");
            }
            Ok(output)
        }
    }
}
