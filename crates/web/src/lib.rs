//! Web scraping backend for presentation outlines.
//!
//! Searches the web for a topic, scrapes Wikipedia and result pages, and
//! turns each page into an [`outline_core::SourceRecord`].

pub mod client;
pub mod error;
pub mod page;
pub mod search;

pub use client::{ScraperConfig, WebScraper};
pub use error::{Result, WebError};
pub use page::{parse_website, parse_wikipedia};
pub use search::{parse_search_results, SearchHit};
