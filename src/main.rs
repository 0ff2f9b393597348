mod cli;

use std::process;

use clap::Parser;
use cli::{command, setup_logging, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli.options) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    let options = &cli.options;
    let outcome = match &cli.command {
        Commands::Weather { file } => command::weather(file, options).await.map(|_| ()),
        Commands::Football { file } => command::football(file, options).await.map(|_| ()),
        Commands::Validate { file, format } => command::validate(file, *format, options).await,
        Commands::All { weather, football } => command::all(weather, football, options).await,
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
