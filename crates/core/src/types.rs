//! Domain types for scraped sources and generated outlines.

use serde::{Deserialize, Serialize};

/// Number of bullets carried by every slide.
pub const BULLETS_PER_SLIDE: usize = 3;

/// Text harvested from a single web page.
///
/// Produced by the scraping layer and treated as read-only by the core.
/// When read back, `source` and `headings` are accepted as fallbacks for
/// `source_label` and `sections`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SourceRecordFields")]
pub struct SourceRecord {
    /// Short label for where the text came from (e.g. "Wikipedia" or a host name).
    pub source_label: String,

    /// Address the page was fetched from.
    pub url: String,

    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Body paragraphs in document order.
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Section-like titles in document order.
    pub sections: Vec<String>,
}

/// Wire shape of a [`SourceRecord`], with the legacy key names kept apart.
#[derive(Deserialize)]
struct SourceRecordFields {
    source_label: Option<String>,
    source: Option<String>,
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    paragraphs: Vec<String>,
    sections: Option<Vec<String>>,
    headings: Option<Vec<String>>,
}

impl TryFrom<SourceRecordFields> for SourceRecord {
    type Error = String;

    fn try_from(fields: SourceRecordFields) -> Result<Self, Self::Error> {
        let source_label = fields
            .source_label
            .or(fields.source)
            .ok_or_else(|| "missing field `source_label`".to_string())?;

        Ok(Self {
            source_label,
            url: fields.url,
            title: fields.title,
            paragraphs: fields.paragraphs,
            sections: fields.sections.or(fields.headings).unwrap_or_default(),
        })
    }
}

impl SourceRecord {
    /// Create an empty record for the given label and url.
    pub fn new(source_label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a body paragraph.
    pub fn with_paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Append a section title.
    pub fn with_section(mut self, text: impl Into<String>) -> Self {
        self.sections.push(text.into());
        self
    }

    /// The url to cite on slides, if there is one.
    pub fn attribution(&self) -> Option<String> {
        let url = self.url.trim();
        (!url.is_empty()).then(|| url.to_string())
    }

    /// Reduced view of this record for export listings.
    pub fn summary(&self) -> SourceSummary {
        SourceSummary {
            source_label: self.source_label.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
        }
    }
}

/// Source listing entry included with exported outlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub source_label: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// A single slide of an outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number.
    #[serde(alias = "slide_number")]
    pub number: usize,

    /// Slide heading.
    pub title: String,

    /// Exactly three bullets, in display order.
    pub content: [String; BULLETS_PER_SLIDE],

    /// Speaker notes.
    #[serde(default)]
    pub notes: String,

    /// Url of the source the content was drawn from.
    #[serde(default)]
    pub source: Option<String>,
}

impl Slide {
    /// Create a slide with no source attribution.
    pub fn new(
        number: usize,
        title: impl Into<String>,
        content: [String; BULLETS_PER_SLIDE],
        notes: impl Into<String>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            content,
            notes: notes.into(),
            source: None,
        }
    }

    /// Attach a source url.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }
}

/// A complete outline: a title plus a fixed-length run of slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Presentation title (the topic).
    pub title: String,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Outline {
    /// Slide titles in order.
    pub fn slide_titles(&self) -> Vec<&str> {
        self.slides.iter().map(|s| s.title.as_str()).collect()
    }
}
