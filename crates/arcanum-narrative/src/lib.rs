//! Narrative shaping for Arcanum.
//!
//! Takes the raw, arbitrary-length analysis a provider (or the built-in
//! template narrator) produces and reshapes it to locale-specific length
//! bounds: a conclusion paragraph is guaranteed, content paragraphs are
//! gently compressed and, if need be, dropped, and the conclusion itself is
//! never altered.

/// Lossy compression passes for content paragraphs.
pub mod compress;
/// Conclusion-paragraph enforcement.
pub mod conclusion;
/// Error types for narrative providers.
pub mod error;
/// The bounds-clamping formatter.
pub mod formatter;
/// Locale classification, bounds, and measurement.
pub mod locale;
/// The provider trait and template narrator.
pub mod narrator;
/// Paragraph splitting helpers.
pub mod paragraph;

/// Re-export compression.
pub use compress::compress;
/// Re-export conclusion enforcement.
pub use conclusion::ensure_conclusion;
/// Re-export error types.
pub use error::{NarrativeError, NarrativeResult};
/// Re-export the formatter entry points.
pub use formatter::{format_deep_reading, format_deep_reading_parts};
/// Re-export locale types.
pub use locale::{Bounds, LengthUnit, Locale, Measure, measure};
/// Re-export narrative sources.
pub use narrator::{NarrativeRequest, NarrativeSource, TemplateNarrator};
/// Re-export paragraph helpers.
pub use paragraph::{join_paragraphs, split_paragraphs};
