use book_discovery_rust::cli::{self, Cli, Outcome};
use book_discovery_rust::config;
use book_discovery_rust::create_discovery;
use clap::Parser;
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::NoResults) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Outcome, Box<dyn Error>> {
    config::load_dotenv();
    let cli = Cli::parse();

    let app_config = config::load_config()?;
    let _guard = match app_config.logger() {
        Some(logger) => Some(config::log::set_global_logging_config(logger)?),
        None => {
            config::log::set_stdout_logging(tracing::Level::WARN)?;
            None
        }
    };

    let discovery = create_discovery(app_config.catalog())?;
    cli::execute(&discovery, cli.command, &mut io::stdout().lock(), &mut io::stderr().lock())
}
