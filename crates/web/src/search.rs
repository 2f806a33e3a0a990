//! DuckDuckGo HTML search result parsing.

use reqwest::Url;
use scraper::{Html, Selector};

/// Base used to resolve relative result links.
const SEARCH_ORIGIN: &str = "https://duckduckgo.com";

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
}

/// Extract up to `limit` result links from a DuckDuckGo HTML results page.
///
/// Redirect links (`/l/?uddg=...`) are resolved to their target. Results
/// without a title or usable href are skipped.
pub fn parse_search_results(html: &str, limit: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a.result__a").unwrap();

    document
        .select(&selector)
        .take(limit)
        .filter_map(|link| {
            let title = link.text().collect::<String>().trim().to_string();
            let url = link.value().attr("href").and_then(resolve_result_link)?;
            (!title.is_empty()).then_some(SearchHit { title, url })
        })
        .collect()
}

/// Turn a result href into the address of the page it points at.
fn resolve_result_link(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else if href.starts_with('/') {
        format!("{}{}", SEARCH_ORIGIN, href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&absolute).ok()?;
    let is_redirect = parsed
        .host_str()
        .is_some_and(|host| host.ends_with("duckduckgo.com"))
        && parsed.path() == "/l/";

    if is_redirect {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, target)| target.into_owned())
    } else {
        Some(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body>
          <div class="result">
            <a class="result__a" href="https://www.rust-lang.org/">Rust Programming Language</a>
          </div>
          <div class="result">
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fdoc.rust-lang.org%2Fbook%2F&amp;rut=abc">The <b>Rust</b> Book</a>
          </div>
          <div class="result">
            <a class="result__a" href="">Empty href</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://example.com/blank">   </a>
          </div>
          <div class="result">
            <a class="result__snippet" href="https://example.com/snippet">Not a title link</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://blog.example.com/rust">Rust blog</a>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_results() {
        let hits = parse_search_results(RESULTS_PAGE, 10);

        assert_eq!(
            hits,
            vec![
                SearchHit {
                    title: "Rust Programming Language".to_string(),
                    url: "https://www.rust-lang.org/".to_string(),
                },
                SearchHit {
                    title: "The Rust Book".to_string(),
                    url: "https://doc.rust-lang.org/book/".to_string(),
                },
                SearchHit {
                    title: "Rust blog".to_string(),
                    url: "https://blog.example.com/rust".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_limit_counts_links_before_filtering() {
        // The first four result links are considered; two of them are unusable.
        let hits = parse_search_results(RESULTS_PAGE, 4);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_page() {
        assert!(parse_search_results("<html></html>", 5).is_empty());
    }

    #[test]
    fn test_resolve_relative_redirect() {
        assert_eq!(
            resolve_result_link("/l/?uddg=https%3A%2F%2Fexample.com%2Fa"),
            Some("https://example.com/a".to_string())
        );
    }

    #[test]
    fn test_redirect_without_target() {
        assert_eq!(resolve_result_link("https://duckduckgo.com/l/?rut=abc"), None);
    }

    #[test]
    fn test_non_redirect_kept_verbatim() {
        assert_eq!(
            resolve_result_link("https://example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(resolve_result_link("not a url"), None);
    }
}
