use ::scraper::{ElementRef, Html, Selector};
use itertools::Itertools;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::gosu_scraper::sections::section_rows;
use crate::gosu_scraper::{
    join_url, own_text, parse_domain, select_hrefs, select_joined_text, select_own_text,
};
use crate::model::{GameConfig, MatchList, MatchRecord, Section};

const MATCH_ID_PATTERN: &str = r"/matches/(\d+)";
const LIVE_STATUS: &str = "Live";

/// Extract the matches listed under `section` of an already fetched page.
pub(crate) fn parse_section_matches(
    document: &Html,
    section: Section,
    config: &GameConfig,
) -> Result<MatchList> {
    let rows = section_rows(document, section)?;
    let extractor = RowExtractor::new(config)?;
    let mut matches = rows.iter().map(|row| extractor.extract(row)).collect_vec();
    if section == Section::Live {
        for record in &mut matches {
            record.live_in = LIVE_STATUS.to_string();
        }
    }
    debug!(count = matches.len(), %section, game = %config.game_label, "parsed section");
    Ok(matches)
}

/// Upcoming, live and recent matches of one page, in that order.
pub(crate) fn parse_all_matches(document: &Html, config: &GameConfig) -> Result<MatchList> {
    let mut matches = parse_section_matches(document, Section::Upcoming, config)?;
    matches.extend(parse_section_matches(document, Section::Live, config)?);
    matches.extend(parse_section_matches(document, Section::Recent, config)?);
    Ok(matches)
}

/// Compiled lookups for the fields of one match row.
///
/// Every lookup is independent: a row lacking some piece of markup still
/// yields a record, with that field left empty.
struct RowExtractor {
    domain: Url,
    game: String,
    match_id: Regex,
    team1: Selector,
    team2: Selector,
    bet1: Selector,
    bet2: Selector,
    live_in: Selector,
    match_link: Selector,
    scores: Selector,
    tournament_link: Selector,
    vod_icon: Selector,
}

impl RowExtractor {
    fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            domain: parse_domain(&config.domain)?,
            game: config.game_label.clone(),
            match_id: Regex::new(MATCH_ID_PATTERN)?,
            team1: Selector::parse(r#"span[class*="opp1"]"#)?,
            team2: Selector::parse(r#"span[class*="opp2"]"#)?,
            bet1: Selector::parse(r#"span[class*="bet1"]"#)?,
            bet2: Selector::parse(r#"span[class*="bet2"]"#)?,
            live_in: Selector::parse(r#"span[class*="live-in"]"#)?,
            match_link: Selector::parse(r#"a[class*="match"]"#)?,
            scores: Selector::parse(r#"span[class*="score-wrap"] span[class*="score"]"#)?,
            tournament_link: Selector::parse(r#"a[class*="tournament"]"#)?,
            vod_icon: Selector::parse(r#"span[class*="vod"] > img"#)?,
        })
    }

    fn extract(&self, row: &ElementRef) -> MatchRecord {
        let href = select_hrefs(row, &self.match_link);
        let match_id = self
            .match_id
            .captures(&href)
            .and_then(|caps| caps.get(1))
            .map(|id| id.as_str().to_string())
            .unwrap_or_default();

        let mut scores = row.select(&self.scores).flat_map(own_text);
        let team1_score = scores.next().unwrap_or_default().to_string();
        let team2_score = scores.next().unwrap_or_default().to_string();

        let tournament = select_hrefs(row, &self.tournament_link);

        MatchRecord {
            match_id,
            url: join_url(&self.domain, &href),
            game: self.game.clone(),
            team1: select_joined_text(row, &self.team1).trim().to_string(),
            team2: select_joined_text(row, &self.team2).trim().to_string(),
            team1_bet: strip_odds(&select_joined_text(row, &self.bet1)),
            team2_bet: strip_odds(&select_joined_text(row, &self.bet2)),
            team1_score,
            team2_score,
            tournament: join_url(&self.domain, &tournament),
            live_in: select_own_text(row, &self.live_in).trim().to_string(),
            has_vods: row.select(&self.vod_icon).next().is_some(),
        }
    }
}

/// Odds are shown as `(1.85)`; keep only the number.
fn strip_odds(text: &str) -> String {
    text.trim_matches(['(', ')', ' ', '\n']).to_string()
}
