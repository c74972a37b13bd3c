use tracing::instrument;

use crate::error::Result;
use crate::gosu_scraper::{self, matches, Html};
use crate::model::*;

/// Scrapes the gosubet match listings of one game.
///
/// `GosuClient` wraps a [`reqwest::Client`] together with the
/// [`GameConfig`] saying which page to fetch and how to label its matches.
/// Every call downloads and parses the page afresh; nothing is cached.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gosu_scraper::Result<()> {
/// use gosu_scraper::{Game, GosuClient};
///
/// let client = GosuClient::new(Game::Dota2);
/// let matches = client.find_upcoming_matches().await?;
/// println!("Found {} upcoming matches", matches.len());
/// # Ok(())
/// # }
/// ```
pub struct GosuClient {
    http: reqwest::Client,
    config: GameConfig,
}

impl GosuClient {
    /// Create a client for one of the built-in games.
    pub fn new(game: Game) -> Self {
        Self::with_config(game.config())
    }

    /// Create a client for any gosubet page, built-in or not.
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: GameConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// The page and game label this client scrapes.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Matches currently being played. Their `live_in` is always `"Live"`.
    #[instrument(skip(self), fields(game = %self.config.game_label))]
    pub async fn find_live_matches(&self) -> Result<MatchList> {
        self.find_section_matches(Section::Live).await
    }

    /// Matches that have not started yet.
    #[instrument(skip(self), fields(game = %self.config.game_label))]
    pub async fn find_upcoming_matches(&self) -> Result<MatchList> {
        self.find_section_matches(Section::Upcoming).await
    }

    /// Recently finished matches.
    #[instrument(skip(self), fields(game = %self.config.game_label))]
    pub async fn find_recent_matches(&self) -> Result<MatchList> {
        self.find_section_matches(Section::Recent).await
    }

    /// Upcoming, live and recent matches, in that order.
    ///
    /// The page is fetched once and all three sections are read from it.
    #[instrument(skip(self), fields(game = %self.config.game_label))]
    pub async fn find_all_matches(&self) -> Result<MatchList> {
        let document = self.get_document().await?;
        matches::parse_all_matches(&document, &self.config)
    }

    async fn find_section_matches(&self, section: Section) -> Result<MatchList> {
        let document = self.get_document().await?;
        matches::parse_section_matches(&document, section, &self.config)
    }

    async fn get_document(&self) -> Result<Html> {
        gosu_scraper::get_document(&self.http, &self.config.page_url).await
    }
}

/// Extract the matches of one section from an already fetched gosubet page.
pub fn parse_section_matches(
    document: &Html,
    section: Section,
    config: &GameConfig,
) -> Result<MatchList> {
    matches::parse_section_matches(document, section, config)
}

/// Extract upcoming, live and recent matches, in that order, from an already
/// fetched gosubet page.
pub fn parse_all_matches(document: &Html, config: &GameConfig) -> Result<MatchList> {
    matches::parse_all_matches(document, config)
}
