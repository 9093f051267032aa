//! The draw engine: question in, reproducible spread out.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::rng::{SeededRng, question_seed};
use crate::shuffle::shuffle;

/// Ordered position labels for the default spread. Positions past the end
/// of this list fall back to a generic numbered label.
pub const SPREAD_POSITIONS: &[&str] = &["Past", "Present", "Future"];

/// Number of cards in the default spread.
pub const DEFAULT_SPREAD_SIZE: usize = 3;

/// Label for the `index`-th position of the spread.
pub fn position_label(index: usize) -> String {
    match SPREAD_POSITIONS.get(index) {
        Some(label) => (*label).to_string(),
        None => format!("Position {}", index + 1),
    }
}

/// A card bound to a spread position and an orientation. Created per draw;
/// only its lightweight signature outlives the active reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The catalog entry that landed in this position.
    pub card: Card,
    /// Position label, e.g. `"Past"`.
    pub position: String,
    /// Whether the card landed reversed.
    pub reversed: bool,
}

impl DrawnCard {
    /// The meaning text matching this card's orientation.
    pub fn meaning(&self) -> &str {
        if self.reversed {
            &self.card.reversed
        } else {
            &self.card.upright
        }
    }

    /// Orientation as a word, for display.
    pub fn orientation(&self) -> &'static str {
        if self.reversed { "Reversed" } else { "Upright" }
    }
}

/// Draw `count` cards for a question.
///
/// The question hashes to a seed; the deck is shuffled with that seed, and a
/// second generator built from the same seed decides orientations. The two
/// streams are deliberately independent: orientation draws never perturb
/// which cards are chosen, so requesting more or fewer positions leaves the
/// card sequence intact. A `count` beyond the deck size clamps silently.
pub fn draw(question: &str, count: usize) -> Vec<DrawnCard> {
    let seed = question_seed(question);
    let deck = Deck::standard();
    let shuffled = shuffle(deck.cards(), seed);
    let mut orientation_rng = SeededRng::new(seed);

    shuffled
        .into_iter()
        .take(count.min(deck.len()))
        .enumerate()
        .map(|(index, card)| DrawnCard {
            card,
            position: position_label(index),
            reversed: orientation_rng.next_bool(),
        })
        .collect()
}

/// A question, a locale, and the cards drawn for it, plus the generated
/// narrative once one exists. The card list is append-only after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The question as the querent asked it.
    pub question: String,
    /// Locale code the reading is rendered in.
    pub locale: String,
    /// Drawn cards in spread order.
    pub cards: Vec<DrawnCard>,
    /// Long-form narrative, when one has been generated.
    pub narrative: Option<String>,
}

impl Reading {
    /// Draw a new reading for a question.
    pub fn new(question: &str, locale: &str, count: usize) -> Self {
        Self {
            question: question.to_string(),
            locale: locale.to_string(),
            cards: draw(question, count),
            narrative: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SIZE;

    #[test]
    fn draw_is_deterministic() {
        let a = draw("What does my future hold?", 3);
        let b = draw("What does my future hold?", 3);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_question_draws_fine() {
        let cards = draw("", 3);
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn position_labels_in_order() {
        let cards = draw("career?", 5);
        assert_eq!(cards[0].position, "Past");
        assert_eq!(cards[1].position, "Present");
        assert_eq!(cards[2].position, "Future");
        assert_eq!(cards[3].position, "Position 4");
        assert_eq!(cards[4].position, "Position 5");
    }

    #[test]
    fn count_clamps_to_deck_size() {
        let cards = draw("everything", 500);
        assert_eq!(cards.len(), DECK_SIZE);
    }

    #[test]
    fn extending_count_preserves_card_prefix() {
        // Orientation uses its own stream, so a longer spread keeps the
        // shorter spread's cards and orientations as a prefix.
        let three = draw("will it rain?", 3);
        let five = draw("will it rain?", 5);
        assert_eq!(&five[..3], &three[..]);
    }

    #[test]
    fn no_duplicate_cards_in_spread() {
        let cards = draw("love?", 10);
        let mut ids: Vec<&str> = cards.iter().map(|c| c.card.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn different_questions_usually_differ() {
        let a = draw("Will I find love?", 3);
        let b = draw("Should I change jobs?", 3);
        assert_ne!(a, b);
    }

    #[test]
    fn meaning_follows_orientation() {
        for drawn in draw("orientation check", 10) {
            if drawn.reversed {
                assert_eq!(drawn.meaning(), drawn.card.reversed);
                assert_eq!(drawn.orientation(), "Reversed");
            } else {
                assert_eq!(drawn.meaning(), drawn.card.upright);
                assert_eq!(drawn.orientation(), "Upright");
            }
        }
    }

    #[test]
    fn reading_carries_question_and_cards() {
        let reading = Reading::new("am I on the right path?", "en", 3);
        assert_eq!(reading.question, "am I on the right path?");
        assert_eq!(reading.cards.len(), 3);
        assert!(reading.narrative.is_none());
        assert_eq!(reading.cards, draw("am I on the right path?", 3));
    }
}
