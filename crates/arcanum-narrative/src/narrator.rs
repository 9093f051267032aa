//! Narrative sources: the provider boundary and the built-in template
//! narrator.
//!
//! An AI completion service implements [`NarrativeSource`] behind whatever
//! transport it likes; the engine only sees the trait. [`TemplateNarrator`]
//! is the offline implementation that assembles an analysis from the drawn
//! cards themselves, used directly or as the fallback when a remote
//! provider fails.

use arcanum_core::DrawnCard;

use crate::error::NarrativeResult;
use crate::locale::Locale;

/// Everything a provider needs to write a deep reading.
#[derive(Debug, Clone)]
pub struct NarrativeRequest<'a> {
    /// Locale the narrative should be written for.
    pub locale: Locale,
    /// The question as the querent asked it.
    pub question: &'a str,
    /// The drawn spread, in position order.
    pub cards: &'a [DrawnCard],
}

/// A collaborator that turns a request into raw narrative text.
///
/// Implementations may block on network calls. Any error means "no
/// narrative available"; the caller decides whether to fall back to a
/// cached narrative or surface a retryable state.
pub trait NarrativeSource {
    /// Produce a raw multi-paragraph analysis for the request.
    fn deep_reading(&self, request: &NarrativeRequest<'_>) -> NarrativeResult<String>;
}

/// Offline narrative generation from the card meanings alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    /// Create a template narrator.
    pub fn new() -> Self {
        Self
    }

    fn opening(question: &str, card_count: usize) -> String {
        if question.trim().is_empty() {
            format!(
                "The spread was drawn without a spoken question; {card_count} cards answer whatever was held in mind."
            )
        } else {
            format!(
                "The spread turns on the question \"{}\". {card_count} cards answer it, each from its own vantage.",
                question.trim()
            )
        }
    }

    fn card_paragraph(drawn: &DrawnCard) -> String {
        format!(
            "In the {} position lies {}, {}. {}. Read against the positions around it, this marks where that energy sits in the arc of the question.",
            drawn.position,
            drawn.card.name,
            drawn.orientation().to_lowercase(),
            drawn.meaning()
        )
    }

    fn closing(locale: Locale, cards: &[DrawnCard]) -> String {
        let names: Vec<&str> = cards.iter().map(|c| c.card.name.as_str()).collect();
        format!(
            "{} The thread running through {} favors attention over haste. Hold the final card's counsel longest, and let the rest give it shape.",
            locale.conclusion_prefix(),
            names.join(", ")
        )
    }
}

impl NarrativeSource for TemplateNarrator {
    fn deep_reading(&self, request: &NarrativeRequest<'_>) -> NarrativeResult<String> {
        let mut out = String::new();
        out.push_str(&Self::opening(request.question, request.cards.len()));
        for drawn in request.cards {
            out.push_str("\n\n");
            out.push_str(&Self::card_paragraph(drawn));
        }
        out.push_str("\n\n");
        out.push_str(&Self::closing(request.locale, request.cards));
        Ok(out)
    }
}
