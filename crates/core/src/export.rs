//! Outline export: structured JSON and a flat text rendering.
//!
//! The text rendering is a plain document with one block per slide:
//!
//! ```text
//! Volcanoes
//! ============================================================
//! Generated from web research on March 04, 2025
//!
//!
//! ============================================================
//! Slide 1: Introduction
//! ============================================================
//!
//! • Introduction to Volcanoes.
//! • Overview of key concepts.
//! • What we'll cover in this presentation.
//!
//! Speaker Notes:
//! Introduction based on web research about Volcanoes
//! ```

use crate::error::Result;
use crate::types::{Outline, Slide, SourceRecord, SourceSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// An outline bundled with the sources it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineExport {
    pub title: String,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub sources: Vec<SourceSummary>,
}

impl OutlineExport {
    /// Bundle `outline` with summaries of `sources`.
    pub fn new(outline: &Outline, sources: &[SourceRecord]) -> Self {
        Self {
            title: outline.title.clone(),
            slides: outline.slides.clone(),
            sources: sources.iter().map(SourceRecord::summary).collect(),
        }
    }

    /// The outline without its source listing.
    pub fn outline(&self) -> Outline {
        Outline {
            title: self.title.clone(),
            slides: self.slides.clone(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously exported JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write pretty-printed JSON to `writer`.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Renders outlines as plain text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Width of the `=` separator rule.
    rule_width: usize,
    /// Date shown under the title, if any.
    generated_on: Option<NaiveDate>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            rule_width: 60,
            generated_on: None,
        }
    }
}

impl TextRenderer {
    /// Create a renderer with a 60-character rule and no date line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator rule width.
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width.max(1);
        self
    }

    /// Include a "Generated from web research on ..." line under the title.
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Render an export as text.
    pub fn render(&self, export: &OutlineExport) -> String {
        let rule = "=".repeat(self.rule_width);
        let mut out = String::new();

        out.push_str(&format!("{}\n{}\n", export.title, rule));
        if let Some(date) = self.generated_on {
            out.push_str(&format!(
                "Generated from web research on {}\n",
                date.format("%B %d, %Y")
            ));
        }
        out.push('\n');

        for slide in &export.slides {
            out.push_str(&format!("\n{}\n", rule));
            out.push_str(&format!("Slide {}: {}\n", slide.number, slide.title));
            out.push_str(&format!("{}\n\n", rule));
            for point in &slide.content {
                out.push_str(&format!("• {}\n", point));
            }
            if let Some(source) = &slide.source {
                out.push_str(&format!("\nSource: {}\n", source));
            }
            let notes = if slide.notes.trim().is_empty() {
                "N/A"
            } else {
                slide.notes.as_str()
            };
            out.push_str(&format!("\nSpeaker Notes:\n{}\n", notes));
        }

        if !export.sources.is_empty() {
            out.push_str(&format!("\n{}\nSOURCES\n{}\n", rule, rule));
            for (idx, source) in export.sources.iter().enumerate() {
                out.push_str(&format!("{}. {} - {}\n", idx + 1, source.source_label, source.url));
            }
        }

        out
    }

    /// Render an export and write it to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W, export: &OutlineExport) -> Result<()> {
        writer.write_all(self.render(export).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outline() -> Outline {
        Outline {
            title: "Volcanoes".to_string(),
            slides: vec![
                Slide::new(
                    1,
                    "Introduction",
                    ["One.".to_string(), "Two.".to_string(), "Three.".to_string()],
                    "Intro notes",
                )
                .with_source(Some("https://en.wikipedia.org/wiki/Volcano".to_string())),
                Slide::new(
                    2,
                    "Conclusion",
                    ["A.".to_string(), "B.".to_string(), "C.".to_string()],
                    "",
                ),
            ],
        }
    }

    fn sample_sources() -> Vec<SourceRecord> {
        vec![SourceRecord::new("Wikipedia", "https://en.wikipedia.org/wiki/Volcano").with_title("Volcano")]
    }

    #[test]
    fn test_json_field_names() {
        let export = OutlineExport::new(&sample_outline(), &sample_sources());
        let value: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(value["title"], "Volcanoes");
        assert_eq!(value["slides"][0]["number"], 1);
        assert_eq!(value["slides"][0]["title"], "Introduction");
        assert_eq!(value["slides"][0]["content"][2], "Three.");
        assert_eq!(value["slides"][0]["notes"], "Intro notes");
        assert_eq!(value["slides"][0]["source"], "https://en.wikipedia.org/wiki/Volcano");
        assert!(value["slides"][1]["source"].is_null());
        assert_eq!(value["sources"][0]["source_label"], "Wikipedia");
        assert_eq!(value["sources"][0]["title"], "Volcano");
    }

    #[test]
    fn test_json_is_lossless() {
        let outline = sample_outline();
        let export = OutlineExport::new(&outline, &sample_sources());
        let parsed = OutlineExport::from_json(&export.to_json().unwrap()).unwrap();

        assert_eq!(parsed, export);
        assert_eq!(parsed.outline(), outline);
    }

    #[test]
    fn test_json_accepts_legacy_slide_number() {
        let json = r#"{
            "title": "T",
            "slides": [{
                "slide_number": 1,
                "title": "Introduction",
                "content": ["a", "b", "c"],
                "notes": "n",
                "source": null
            }]
        }"#;
        let parsed = OutlineExport::from_json(json).unwrap();

        assert_eq!(parsed.slides[0].number, 1);
        assert!(parsed.sources.is_empty());
    }

    #[test]
    fn test_json_rejects_wrong_bullet_count() {
        let json = r#"{"title": "T", "slides": [{"number": 1, "title": "x", "content": ["a", "b"]}]}"#;
        assert!(OutlineExport::from_json(json).is_err());
    }

    #[test]
    fn test_write_json_appends_newline() {
        let export = OutlineExport::new(&sample_outline(), &[]);
        let mut buf = Vec::new();
        export.write_json(&mut buf).unwrap();

        assert!(buf.ends_with(b"}\n"));
    }

    #[test]
    fn test_text_rendering() {
        let export = OutlineExport::new(&sample_outline(), &sample_sources());
        let text = TextRenderer::new().with_rule_width(5).render(&export);

        let expected = "\
Volcanoes
=====


=====
Slide 1: Introduction
=====

• One.
• Two.
• Three.

Source: https://en.wikipedia.org/wiki/Volcano

Speaker Notes:
Intro notes

=====
Slide 2: Conclusion
=====

• A.
• B.
• C.

Speaker Notes:
N/A

=====
SOURCES
=====
1. Wikipedia - https://en.wikipedia.org/wiki/Volcano
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_generated_on_line() {
        let export = OutlineExport::new(&sample_outline(), &[]);
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let text = TextRenderer::new().with_generated_on(date).render(&export);

        assert!(text.starts_with(&format!(
            "Volcanoes\n{}\nGenerated from web research on March 04, 2025\n\n",
            "=".repeat(60)
        )));
        assert!(!text.contains("SOURCES"));
    }

    #[test]
    fn test_write_to() {
        let export = OutlineExport::new(&sample_outline(), &[]);
        let renderer = TextRenderer::new();
        let mut buf = Vec::new();
        renderer.write_to(&mut buf, &export).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), renderer.render(&export));
    }
}
