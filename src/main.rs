use clap::Parser;
use miette::Result;
use larder::cli::{logging, Cli};
use larder::core::{Config, Home};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    // A broken config is reported by the command that reads it
    let config_log = Home::resolve_root(cli.global.home.as_deref())
        .and_then(|root| Config::load(&root).ok())
        .and_then(|config| config.log);
    logging::init(&cli.global, config_log.as_deref());

    larder::cli::run(cli)
}
