use std::process::ExitCode;
use std::str::FromStr;

use gosu_scraper::{Game, GosuClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let game = match std::env::args().nth(1) {
        None => Game::Dota2,
        Some(name) => match Game::from_str(&name) {
            Ok(game) => game,
            Err(_) => {
                eprintln!("unknown game: {name}");
                return ExitCode::FAILURE;
            }
        },
    };
    tracing::info!(%game, "scraping gosubet page");

    let client = GosuClient::new(game);
    let matches = match client.find_all_matches().await {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("failed to scrape {game}: {e}");
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string_pretty(&matches) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize matches: {e}");
            ExitCode::FAILURE
        }
    }
}
