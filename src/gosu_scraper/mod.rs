pub(crate) mod matches;
pub(crate) mod sections;

use std::collections::HashSet;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

use crate::error::{GosuError, Result};

/// Fetch a URL and parse the response body as an HTML document.
///
/// Error statuses are not rejected: whatever body the server sends back is
/// parsed and searched like any other page.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| GosuError::Http {
        url: url.to_owned(),
        source: e,
    })?;
    debug!(url, status = %response.status(), "received page");

    let body = response.text().await.map_err(|e| GosuError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// Concatenate every text node beneath the elements matching `selector`
/// inside `element`. A text node reachable from several nested matches is
/// only counted once.
pub(crate) fn select_joined_text(element: &ElementRef, selector: &Selector) -> String {
    let text_nodes: HashSet<_> = element
        .select(selector)
        .flat_map(|matched| matched.descendants())
        .filter(|node| node.value().is_text())
        .map(|node| node.id())
        .collect();

    element
        .descendants()
        .filter(|node| text_nodes.contains(&node.id()))
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .collect()
}

/// Concatenate the text nodes that are direct children of the elements
/// matching `selector`, skipping text nested in further tags.
pub(crate) fn select_own_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(own_text)
        .collect()
}

/// Direct text children of `element`, in document order.
pub(crate) fn own_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
}

/// Concatenate the `href` attributes of all elements matching `selector`.
pub(crate) fn select_hrefs(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .filter_map(|e| e.value().attr("href"))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse the base every relative href is resolved against.
pub(crate) fn parse_domain(domain: &str) -> Result<Url> {
    Url::parse(domain).map_err(|e| GosuError::InvalidUrl {
        url: domain.to_owned(),
        source: e,
    })
}

/// Resolve `href` against `base`. Hrefs that cannot be joined are kept as-is.
pub(crate) fn join_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment_root(document: &Html) -> ElementRef<'_> {
        document.root_element()
    }

    #[test]
    fn test_select_joined_text_spans_inline_tags() {
        let document =
            Html::parse_fragment(r#"<span class="opp opp1"><b>Team</b> <i>Liquid</i></span>"#);
        let selector = Selector::parse(r#"span[class*="opp1"]"#).unwrap();
        assert_eq!(
            select_joined_text(&fragment_root(&document), &selector),
            "Team Liquid"
        );
    }

    #[test]
    fn test_select_joined_text_counts_nested_matches_once() {
        let document = Html::parse_fragment(
            r#"<span class="opp1">Na<span class="opp1-tag">'Vi</span></span>"#,
        );
        let selector = Selector::parse(r#"span[class*="opp1"]"#).unwrap();
        assert_eq!(
            select_joined_text(&fragment_root(&document), &selector),
            "Na'Vi"
        );
    }

    #[test]
    fn test_select_own_text_skips_nested_tags() {
        let document =
            Html::parse_fragment(r#"<span class="live-in">3h 20m <small>ago</small></span>"#);
        let selector = Selector::parse(r#"span[class*="live-in"]"#).unwrap();
        assert_eq!(
            select_own_text(&fragment_root(&document), &selector),
            "3h 20m "
        );
    }

    #[test]
    fn test_select_hrefs_missing() {
        let document = Html::parse_fragment(r#"<a class="other">x</a>"#);
        let selector = Selector::parse(r#"a[class*="match"]"#).unwrap();
        assert_eq!(select_hrefs(&fragment_root(&document), &selector), "");
    }

    #[test]
    fn test_join_url() {
        let base = parse_domain("http://www.gosugamers.net/").unwrap();
        assert_eq!(
            join_url(&base, "/dota2/matches/12345-a-vs-b"),
            "http://www.gosugamers.net/dota2/matches/12345-a-vs-b"
        );
        assert_eq!(
            join_url(&base, "https://other.example/x"),
            "https://other.example/x"
        );
        assert_eq!(join_url(&base, ""), "http://www.gosugamers.net/");
    }

    #[test]
    fn test_parse_domain_rejects_relative() {
        let err = parse_domain("gosugamers").unwrap_err();
        assert!(matches!(err, GosuError::InvalidUrl { .. }));
    }
}
