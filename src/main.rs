mod cli;

use clap::Parser;
use tracing::{debug, error};

use cli::{CheckCommand, Cli, Commands};
use stayrate::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = cli::load_config(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.init_logging();
    debug!(command = ?cli.command, "stayrate starting");

    let snapshot = cli.snapshot.as_deref();
    match cli.command {
        Commands::Events(args) => {
            let service = cli::service(&config, snapshot)?;
            cli::events::run(&service, &args.property, &args.month, args.json).await
        }
        Commands::Quote(args) => {
            let service = cli::service(&config, snapshot)?;
            cli::quote::run(&service, &config.calendar, &args).await
        }
        Commands::Rules(args) => {
            let service = cli::service(&config, snapshot)?;
            cli::rules::run(&service, &config.calendar, &args.property).await
        }
        Commands::Check(CheckCommand::Config) => {
            cli::check::config(&config);
            Ok(())
        }
    }
}
