//! Page scrapers: HTML in, [`SourceRecord`] out.

use outline_core::{SourceCleaner, SourceRecord};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

/// Label used for Wikipedia records.
pub const WIKIPEDIA_LABEL: &str = "Wikipedia";

/// Paragraphs read from a Wikipedia article body.
const WIKIPEDIA_PARAGRAPH_LIMIT: usize = 5;

/// Paragraphs read from a generic page.
const WEBSITE_PARAGRAPH_LIMIT: usize = 10;

/// Headings read from any page.
const HEADING_LIMIT: usize = 10;

/// Elements whose text is page chrome rather than content.
const BOILERPLATE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Class name fragments that mark a generic content container.
const CONTENT_CLASS_HINTS: &[&str] = &["content", "main", "article"];

/// Scrape a Wikipedia article.
///
/// The record title falls back to `topic` when the page has no heading.
pub fn parse_wikipedia(html: &str, url: &str, topic: &str, cleaner: &SourceCleaner) -> SourceRecord {
    let document = Html::parse_document(html);

    let title = first_text(&document, "h1.firstHeading").unwrap_or_else(|| topic.to_string());

    let paragraph = selector("p");
    let paragraphs = match document.select(&selector("div.mw-parser-output")).next() {
        Some(body) => cleaner.paragraphs(
            body.select(&paragraph)
                .take(WIKIPEDIA_PARAGRAPH_LIMIT)
                .map(element_text),
        ),
        None => Vec::new(),
    };

    let sections = cleaner.headings(
        document
            .select(&selector("h2, h3"))
            .take(HEADING_LIMIT)
            .map(element_text),
    );

    SourceRecord {
        source_label: WIKIPEDIA_LABEL.to_string(),
        url: url.to_string(),
        title,
        paragraphs,
        sections,
    }
}

/// Scrape a generic web page.
///
/// Text inside scripts, styles, navigation, headers and footers is ignored.
/// Paragraphs come from the main content region when one can be found.
pub fn parse_website(html: &str, url: &str, cleaner: &SourceCleaner) -> SourceRecord {
    let document = Html::parse_document(html);

    let title = first_text(&document, "title").unwrap_or_else(|| "Untitled".to_string());

    let paragraph = selector("p");
    let candidates: Vec<ElementRef> = match main_region(&document) {
        Some(region) => region.select(&paragraph).collect(),
        None => document.select(&paragraph).collect(),
    };
    let paragraphs = cleaner.paragraphs(
        candidates
            .into_iter()
            .filter(|el| !is_boilerplate(el))
            .take(WEBSITE_PARAGRAPH_LIMIT)
            .map(element_text),
    );

    let sections = cleaner.headings(
        document
            .select(&selector("h1, h2, h3"))
            .filter(|el| !is_boilerplate(el))
            .take(HEADING_LIMIT)
            .map(element_text),
    );

    SourceRecord {
        source_label: host_label(url),
        url: url.to_string(),
        title,
        paragraphs,
        sections,
    }
}

/// Find the element holding the page's main content.
fn main_region(document: &Html) -> Option<ElementRef<'_>> {
    let by_tag = ["main", "article"]
        .into_iter()
        .find_map(|tag| document.select(&selector(tag)).find(|el| !is_boilerplate(el)));

    by_tag.or_else(|| {
        document.select(&selector("div[class]")).find(|el| {
            !is_boilerplate(el)
                && el
                    .value()
                    .classes()
                    .any(|class| CONTENT_CLASS_HINTS.iter().any(|hint| class.contains(hint)))
        })
    })
}

/// Whether `element` sits inside page chrome.
fn is_boilerplate(element: &ElementRef) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|el| BOILERPLATE_TAGS.contains(&el.name()))
    })
}

/// Text of the first match for `css`, if it is non-empty.
fn first_text(document: &Html, css: &str) -> Option<String> {
    document
        .select(&selector(css))
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Host name of `url`, or the url itself when it has none.
fn host_label(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.host_str().map(|host| match u.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            })
        })
        .unwrap_or_else(|| url.to_string())
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}
