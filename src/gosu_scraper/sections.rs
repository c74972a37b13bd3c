use std::collections::HashSet;

use ::scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::model::Section;

/// Collect the table rows listed under `section`.
///
/// A section is any `h1`/`h2` whose first text node contains the section
/// label (case-sensitive substring). Its rows are the `tr` elements inside
/// the first following sibling `div` classed exactly `content`. Rows come
/// back in document order without duplicates; a page without the heading
/// yields no rows.
pub(crate) fn section_rows(document: &Html, section: Section) -> Result<Vec<ElementRef<'_>>> {
    let label = section.to_string();
    let heading_selector = Selector::parse("h1, h2")?;
    let row_selector = Selector::parse("tr")?;

    let rows: HashSet<_> = document
        .select(&heading_selector)
        .filter(|heading| heading_matches(heading, &label))
        .filter_map(|heading| {
            heading
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(is_content_block)
        })
        .flat_map(|block| block.select(&row_selector))
        .map(|row| row.id())
        .collect();

    Ok(document
        .select(&row_selector)
        .filter(|row| rows.contains(&row.id()))
        .collect())
}

fn heading_matches(heading: &ElementRef, label: &str) -> bool {
    heading
        .children()
        .find_map(|node| node.value().as_text())
        .is_some_and(|text| text.contains(label))
}

fn is_content_block(element: &ElementRef) -> bool {
    element.value().name() == "div" && element.value().attr("class") == Some("content")
}
