//! Outline assembly and the end-to-end generation pipeline.

use crate::allocate::SlideAllocator;
use crate::enhance::ContentEnhancer;
use crate::error::Result;
use crate::types::{Outline, Slide, SourceRecord};

/// Wraps an allocated slide list into an [`Outline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineAssembler;

impl OutlineAssembler {
    /// Create a new assembler.
    pub fn new() -> Self {
        Self
    }

    /// Build the outline value for `topic`.
    pub fn assemble(&self, topic: &str, slides: Vec<Slide>) -> Outline {
        Outline {
            title: topic.to_string(),
            slides,
        }
    }
}

/// Allocate slides for `topic` and normalize their bullets.
///
/// This is the non-interactive path from scraped sources to a finished
/// presentation outline, using default settings throughout.
pub fn build_outline(topic: &str, slide_count: usize, sources: &[SourceRecord]) -> Result<Outline> {
    let outline = SlideAllocator::new().allocate(topic, slide_count, sources)?;
    Ok(ContentEnhancer::new().enhance(&outline))
}
