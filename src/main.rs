mod cli;
mod conf;
mod download;
mod fetch;
mod parquet;
mod sectors;
mod track;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Active {
            basin,
            season,
            zoom,
        } => match command::active(basin, *season, *zoom).await {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => eprintln!("Error: {:#}", e),
        },
        Commands::Season {
            basin,
            year,
            from,
            to,
            zoom,
        } => match command::season(basin, *year, *from, *to, *zoom).await {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => eprintln!("Error: {:#}", e),
        },
        Commands::Parse { file, zoom } => {
            if let Err(e) = command::parse(file, *zoom) {
                eprintln!("Error: {:#}", e);
            }
        }
        Commands::Classify { knots } => {
            command::classify(*knots);
        }
    }

    Ok(())
}
