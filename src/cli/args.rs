use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::habits::Frequency;

#[derive(Parser)]
#[command(name = "habits")]
#[command(about = "Track daily habits, streaks and completion statistics")]
#[command(long_about = "habits - a habit tracker for the terminal

Create habits, check them off each day, and watch your streaks grow.

QUICK START:
  habits add \"Read 20 pages\"    Create a habit
  habits done \"Read 20 pages\"   Mark it completed today
  habits list                   Today's checklist with streaks
  habits stats                  Completion statistics

Habits can be referred to by id or by name.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (default: ~/.habits)
    #[arg(long, global = true, env = "HABITS_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new habit
    ///
    /// # Examples
    ///
    ///   habits add "Meditate"
    ///   habits add "Long run" --frequency weekly -d "10km or more"
    Add {
        /// Habit name
        name: String,

        /// Optional description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Target frequency
        #[arg(long, short = 'f', value_enum, default_value = "daily")]
        frequency: Frequency,
    },

    /// List habits with today's state and current streak
    #[command(alias = "ls")]
    List,

    /// Show a habit with its full completion history
    Show {
        /// Habit id or name
        habit: String,

        /// Days shown in the recent-days strip, 0-3650 (default: config `stats.history_days`)
        #[arg(long, value_parser = clap::value_parser!(u16).range(0..=3650))]
        days: Option<u16>,
    },

    /// Mark a habit completed for today
    Done {
        /// Habit id or name
        habit: String,
    },

    /// Mark a habit not completed for today
    Undo {
        /// Habit id or name
        habit: String,
    },

    /// Delete a habit and its whole history
    #[command(alias = "rm")]
    Delete {
        /// Habit id or name
        habit: String,
    },

    /// Show completion statistics across all habits
    Stats,

    /// Show the effective configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   habits completions zsh > ~/.zsh/completions/_habits
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
