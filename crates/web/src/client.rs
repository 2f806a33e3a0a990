//! HTTP client that gathers source records for a topic.

use crate::error::{Result, WebError};
use crate::page::{parse_website, parse_wikipedia};
use crate::search::{parse_search_results, SearchHit};
use outline_core::{SourceCleaner, SourceRecord};
use reqwest::{Client, Url};
use std::time::Duration;

/// Browser-like User-Agent; some sites refuse unknown clients.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Settings for [`WebScraper`].
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    user_agent: String,
    timeout: Duration,
    /// Pause between page fetches.
    delay: Duration,
    wikipedia_base: String,
    search_base: String,
    cleaner: SourceCleaner,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            delay: Duration::from_secs(1),
            wikipedia_base: "https://en.wikipedia.org".to_string(),
            search_base: "https://html.duckduckgo.com".to_string(),
            cleaner: SourceCleaner::default(),
        }
    }
}

impl ScraperConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the User-Agent header sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause between page fetches.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the Wikipedia origin (scheme and host, no trailing slash).
    pub fn with_wikipedia_base(mut self, base: impl Into<String>) -> Self {
        self.wikipedia_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the search engine origin (scheme and host, no trailing slash).
    pub fn with_search_base(mut self, base: impl Into<String>) -> Self {
        self.search_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the text cleaner applied to scraped paragraphs and headings.
    pub fn with_cleaner(mut self, cleaner: SourceCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }
}

/// Fetches pages and turns them into source records.
pub struct WebScraper {
    client: Client,
    config: ScraperConfig,
}

impl WebScraper {
    /// Create a scraper with the given settings.
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Gather up to `max_sources` search results plus Wikipedia for `topic`.
    ///
    /// Wikipedia comes first when available. Search results without usable
    /// paragraphs are dropped. Individual failures are logged and skipped, so
    /// the result may be empty but this never fails.
    pub async fn scrape_topic(&self, topic: &str, max_sources: usize) -> Vec<SourceRecord> {
        let mut sources = Vec::new();

        log::debug!("Searching Wikipedia for {:?}", topic);
        match self.wikipedia(topic).await {
            Ok(record) => sources.push(record),
            Err(e) => log::warn!("Wikipedia scraping error: {}", e),
        }

        log::debug!("Searching the web for {:?}", topic);
        let hits = match self.search(topic, max_sources).await {
            Ok(hits) => hits,
            Err(e) => {
                log::warn!("Search error: {}", e);
                Vec::new()
            }
        };

        for (idx, hit) in hits.iter().enumerate() {
            if idx > 0 {
                tokio::time::sleep(self.config.delay).await;
            }
            log::debug!("Scraping {}/{}: {}", idx + 1, hits.len(), hit.url);
            match self.website(&hit.url).await {
                Ok(record) => sources.push(record),
                Err(e) => log::warn!("Error scraping {}: {}", hit.url, e),
            }
        }

        log::debug!("Scraped {} sources for {:?}", sources.len(), topic);
        sources
    }

    /// Scrape the Wikipedia article for `topic`.
    pub async fn wikipedia(&self, topic: &str) -> Result<SourceRecord> {
        let url = format!(
            "{}/wiki/{}",
            self.config.wikipedia_base,
            topic.trim().replace(' ', "_")
        );
        let html = self.fetch(&url).await?;
        Ok(parse_wikipedia(&html, &url, topic, &self.config.cleaner))
    }

    /// Run a web search and return up to `limit` hits.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let endpoint = format!("{}/html/", self.config.search_base);
        let url = Url::parse_with_params(&endpoint, &[("q", query)])
            .map_err(|e| WebError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        let html = self.fetch(url.as_str()).await?;
        Ok(parse_search_results(&html, limit))
    }

    /// Scrape a generic page. Pages without usable paragraphs are an error.
    pub async fn website(&self, url: &str) -> Result<SourceRecord> {
        let html = self.fetch(url).await?;
        let record = parse_website(&html, url, &self.config.cleaner);
        if record.paragraphs.is_empty() {
            return Err(WebError::NoContent(url.to_string()));
        }
        Ok(record)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WebError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
