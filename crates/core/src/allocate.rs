//! Slide allocation: turning scraped sources into a fixed-length outline.
//!
//! The outline always has exactly the requested number of slides. Slide 1 is
//! the introduction, the last slide is the conclusion, and the slots between
//! are filled from source sections first and generic filler second.

use crate::assemble::OutlineAssembler;
use crate::error::{Error, Result};
use crate::extract::{truncate_chars, KeyPointExtractor};
use crate::policy::SlideRole;
use crate::types::{Outline, Slide, SourceRecord, BULLETS_PER_SLIDE};

/// Builds outlines from topic, slide count and sources.
#[derive(Debug, Clone)]
pub struct SlideAllocator {
    extractor: KeyPointExtractor,
    /// Characters of the lead paragraph fed to the introduction.
    intro_chars: usize,
    /// Maximum characters of a body slide title.
    max_title_chars: usize,
    /// Paragraphs of a source scanned for each body slide.
    paragraphs_per_slide: usize,
}

impl Default for SlideAllocator {
    fn default() -> Self {
        Self {
            extractor: KeyPointExtractor::default(),
            intro_chars: 300,
            max_title_chars: 60,
            paragraphs_per_slide: 3,
        }
    }
}

impl SlideAllocator {
    /// Create an allocator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom key point extractor.
    pub fn with_extractor(mut self, extractor: KeyPointExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Set how many characters of the lead paragraph feed the introduction.
    pub fn with_intro_chars(mut self, chars: usize) -> Self {
        self.intro_chars = chars;
        self
    }

    /// Set the maximum body slide title length.
    pub fn with_max_title_chars(mut self, chars: usize) -> Self {
        self.max_title_chars = chars.max(1);
        self
    }

    /// Allocate an outline of exactly `slide_count` slides.
    ///
    /// Sparse or empty `sources` never shorten the outline; missing content is
    /// replaced with fallback text. Only `slide_count < 2` is rejected.
    pub fn allocate(&self, topic: &str, slide_count: usize, sources: &[SourceRecord]) -> Result<Outline> {
        if slide_count < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "an outline needs at least 2 slides, got {}",
                slide_count
            )));
        }

        let mut slides = Vec::with_capacity(slide_count);
        slides.push(self.introduction(topic, sources));

        // The last slot always belongs to the conclusion.
        let body_limit = slide_count - 1;

        'sources: for source in sources.iter().take(slide_count) {
            for section in source.sections.iter().take(slide_count - 1) {
                let number = slides.len() + 1;
                if number > body_limit {
                    break 'sources;
                }
                slides.push(self.body_slide(number, section, source));
            }
        }
        let body_count = slides.len() - 1;

        let filler = SlideRole::Filler.template();
        while slides.len() < body_limit {
            let number = slides.len() + 1;
            slides.push(Slide::new(
                number,
                filler.title_for(number),
                filler.bullets_for(topic),
                filler.notes_for(topic),
            ));
        }

        if slides.len() < slide_count {
            let conclusion = SlideRole::Conclusion.template();
            slides.push(Slide::new(
                slides.len() + 1,
                conclusion.title_for(topic),
                conclusion.bullets_for(topic),
                conclusion.notes_for(topic),
            ));
        }

        log::debug!(
            "Allocated {} slides for {:?}: {} from sections, {} filler, {} sources available",
            slides.len(),
            topic,
            body_count,
            body_limit - 1 - body_count,
            sources.len()
        );

        Ok(OutlineAssembler::new().assemble(topic, slides))
    }

    /// Slide 1, drawn from the lead paragraph of the first source.
    fn introduction(&self, topic: &str, sources: &[SourceRecord]) -> Slide {
        let template = SlideRole::Introduction.template();

        let points = sources
            .first()
            .and_then(|s| s.paragraphs.first())
            .map(|p| {
                let lead = truncate_chars(p, self.intro_chars);
                self.extractor.extract(&lead, BULLETS_PER_SLIDE)
            })
            .unwrap_or_default();

        // All or nothing: partial extraction falls back entirely.
        let content = match <[String; BULLETS_PER_SLIDE]>::try_from(points) {
            Ok(content) => content,
            Err(_) => template.bullets_for(topic),
        };

        Slide::new(1, template.title_for(topic), content, template.notes_for(topic))
            .with_source(sources.first().and_then(SourceRecord::attribution))
    }

    /// A slide for one section of `source`.
    fn body_slide(&self, number: usize, section: &str, source: &SourceRecord) -> Slide {
        let template = SlideRole::Body.template();

        let mut points: Vec<String> = Vec::with_capacity(BULLETS_PER_SLIDE);
        for paragraph in source.paragraphs.iter().take(self.paragraphs_per_slide) {
            points.extend(self.extractor.extract(paragraph, BULLETS_PER_SLIDE));
            if points.len() >= BULLETS_PER_SLIDE {
                break;
            }
        }

        let mut points = points.into_iter();
        let content = std::array::from_fn(|i| {
            points
                .next()
                .unwrap_or_else(|| template.bullet_for(i, section))
        });

        Slide::new(
            number,
            template.title_for(truncate_chars(section, self.max_title_chars)),
            content,
            template.notes_for(&source.source_label),
        )
        .with_source(source.attribution())
    }
}
