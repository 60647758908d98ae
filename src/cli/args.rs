//! Command-line arguments

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::list::ListCommands;
use crate::cli::commands::profile::ProfileCommands;
use crate::cli::commands::recipe::RecipeCommands;
use crate::cli::commands::scan::ScanArgs;
use crate::cli::commands::stores::StoresArgs;

#[derive(Parser, Debug)]
#[command(
    name = "larder",
    version,
    about = "Larder - find recipes, check them against your diet, and keep a shopping list",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Data directory holding the shopping list, profile, and config.yaml
    #[arg(long, global = true, env = "LARDER_HOME")]
    pub home: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value = "auto")]
    pub format: OutputFormat,

    /// More log output (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human readable; tables for lists
    #[default]
    Auto,
    /// Tab/space aligned text
    Tsv,
    Json,
    Csv,
    Yaml,
    /// Markdown table
    Md,
    /// Identifiers only, one per line
    Id,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the shopping list
    #[command(subcommand)]
    List(ListCommands),

    /// Dietary preferences, calorie goal, and allergies
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Search and view recipes
    #[command(subcommand)]
    Recipe(RecipeCommands),

    /// Identify ingredients and get recipe suggestions
    Scan(ScanArgs),

    /// Find stores nearby
    Stores(StoresArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
