//! Bullet text cleanup applied before an outline is presented.

use crate::types::{Outline, Slide};

/// Normalizes bullet punctuation across an outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentEnhancer;

impl ContentEnhancer {
    /// Create a new enhancer.
    pub fn new() -> Self {
        Self
    }

    /// Return a copy of `outline` with every bullet trimmed and terminated by a period.
    ///
    /// Only a trailing `.` counts as terminated, so `"Wow!"` becomes `"Wow!."`.
    /// Bullet count and order are untouched.
    pub fn enhance(&self, outline: &Outline) -> Outline {
        Outline {
            title: outline.title.clone(),
            slides: outline.slides.iter().map(|s| self.enhance_slide(s)).collect(),
        }
    }

    /// Enhance a single slide.
    pub fn enhance_slide(&self, slide: &Slide) -> Slide {
        Slide {
            content: slide.content.each_ref().map(|point| terminate(point)),
            ..slide.clone()
        }
    }
}

fn terminate(point: &str) -> String {
    let point = point.trim();
    if point.ends_with('.') {
        point.to_string()
    } else {
        format!("{}.", point)
    }
}
