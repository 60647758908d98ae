//! Shared helper functions for CLI commands

use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::{Config, Home};
use crate::providers::{FixtureCatalog, FixtureStoreFinder};

/// Open the home directory selected by the global options
pub fn open_home(global: &GlobalOpts) -> Result<Home> {
    Home::locate(global.home.as_deref()).into_diagnostic()
}

/// Load the home's config; YAML problems are reported with their source
pub fn load_config(home: &Home) -> Result<Config> {
    Ok(home.config()?)
}

/// Recipe catalog honoring the `catalog` config key
pub fn load_catalog(config: &Config) -> Result<FixtureCatalog> {
    Ok(FixtureCatalog::load(config.catalog.as_deref())?)
}

/// Store directory honoring the `stores` config key
pub fn load_store_finder(config: &Config) -> Result<FixtureStoreFinder> {
    Ok(FixtureStoreFinder::load(config.stores.as_deref())?)
}

/// Format a string ID for display, truncating if too long
///
/// Generated item ids are 31 characters; tables show the first 13.
pub fn format_short_id_str(id: &str) -> String {
    if id.chars().count() > 16 {
        let head: String = id.chars().take(13).collect();
        format!("{}...", head)
    } else {
        id.to_string()
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Escape a string for a Markdown table cell
pub fn escape_md(s: &str) -> String {
    s.replace('|', "\\|")
}

/// "1 item" / "3 items"
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Five-character star bar for a 0-5 rating
pub fn stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}
