//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod filters;
pub mod helpers;
pub mod logging;
pub mod output;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
pub use filters::{CategoryFilter, ItemFilter};

use miette::Result;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Commands::List(cmd) => commands::list::run(cmd, &global),
        Commands::Profile(cmd) => commands::profile::run(cmd, &global),
        Commands::Recipe(cmd) => commands::recipe::run(cmd, &global),
        Commands::Scan(args) => commands::scan::run(args, &global),
        Commands::Stores(args) => commands::stores::run(args, &global),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
