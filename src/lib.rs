//! Scrape esports match listings from the gosubet pages of gosugamers.net.
//!
//! ```no_run
//! # async fn example() -> gosu_scraper::Result<()> {
//! use gosu_scraper::{Game, GosuClient};
//!
//! let client = GosuClient::new(Game::CounterStrike);
//! for record in client.find_all_matches().await? {
//!     println!("{} vs {} ({})", record.team1, record.team2, record.live_in);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod gosu_scraper;
pub mod model;

pub use ::scraper::Html;
pub use client::{parse_all_matches, parse_section_matches, GosuClient};
pub use error::{GosuError, Result};
pub use model::*;
