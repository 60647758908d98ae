//! Log subscriber setup for the binary
//!
//! Filter precedence: `LARDER_LOG`, then `-v`/`-q`, then the `log` key of
//! config.yaml, then `warn`.

use tracing_subscriber::EnvFilter;

use crate::cli::GlobalOpts;

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "LARDER_LOG";

/// Pick the filter directive for this run
pub fn filter_directive(
    env_value: Option<&str>,
    global: &GlobalOpts,
    config_log: Option<&str>,
) -> String {
    if let Some(directive) = env_value.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }
    if global.quiet {
        return "error".to_string();
    }
    match global.verbose {
        0 => {}
        1 => return "info".to_string(),
        _ => return "debug".to_string(),
    }
    config_log
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("warn")
        .to_string()
}

/// Install the stderr subscriber
pub fn init(global: &GlobalOpts, config_log: Option<&str>) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), global, config_log);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be set when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
