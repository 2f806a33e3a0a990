//! Core domain types, key-point extraction, slide allocation, and export
//! for presentation outlines built from scraped web text.

pub mod allocate;
pub mod assemble;
pub mod enhance;
pub mod error;
pub mod export;
pub mod extract;
pub mod normalize;
pub mod policy;
pub mod types;

pub use allocate::SlideAllocator;
pub use assemble::{build_outline, OutlineAssembler};
pub use enhance::ContentEnhancer;
pub use error::{Error, Result};
pub use export::{OutlineExport, TextRenderer};
pub use extract::{extract_key_points, KeyPointExtractor};
pub use normalize::SourceCleaner;
pub use policy::{RoleTemplate, SlideRole};
pub use types::{Outline, Slide, SourceRecord, SourceSummary, BULLETS_PER_SLIDE};
