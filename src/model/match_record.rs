use serde::Serialize;

/// A list of match records scraped from one page section.
pub type MatchList = Vec<MatchRecord>;

/// One match listing from a gosubet page.
///
/// Every string field is empty when the page did not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub match_id: String,
    pub url: String,
    pub game: String,
    pub team1: String,
    pub team2: String,
    pub team1_bet: String,
    pub team2_bet: String,
    pub team1_score: String,
    pub team2_score: String,
    pub tournament: String,
    /// Countdown or status text, `"Live"` for matches in the live section.
    pub live_in: String,
    pub has_vods: bool,
}
