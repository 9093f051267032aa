//! The fixed 78-card deck: 22 major arcana plus four suits of 14.

use crate::card::{Card, Rank, Suit};

/// Major-arcana catalog: number, id slug, display name, upright meaning,
/// reversed meaning (22 entries).
const MAJOR_CARDS: &[(u8, &str, &str, &str, &str)] = &[
    (
        0,
        "fool",
        "The Fool",
        "New beginnings, spontaneity, a leap of faith",
        "Recklessness, hesitation, a risk not taken",
    ),
    (
        1,
        "magician",
        "The Magician",
        "Willpower, skill, manifestation",
        "Manipulation, scattered or untapped talent",
    ),
    (
        2,
        "high-priestess",
        "The High Priestess",
        "Intuition, hidden knowledge, stillness",
        "Secrets withheld, the inner voice ignored",
    ),
    (
        3,
        "empress",
        "The Empress",
        "Abundance, nurture, creativity",
        "Creative block, smothering care",
    ),
    (
        4,
        "emperor",
        "The Emperor",
        "Structure, authority, stability",
        "Rigidity, domination, absent leadership",
    ),
    (
        5,
        "hierophant",
        "The Hierophant",
        "Tradition, guidance, shared belief",
        "Dogma, rebellion against convention",
    ),
    (
        6,
        "lovers",
        "The Lovers",
        "Union, alignment of values, a meaningful choice",
        "Disharmony, misaligned values",
    ),
    (
        7,
        "chariot",
        "The Chariot",
        "Determination, victory through control",
        "Lost direction, force without aim",
    ),
    (
        8,
        "strength",
        "Strength",
        "Quiet courage, patience, compassion",
        "Self-doubt, raw emotion unchecked",
    ),
    (
        9,
        "hermit",
        "The Hermit",
        "Introspection, solitude, inner guidance",
        "Isolation, withdrawal taken too far",
    ),
    (
        10,
        "wheel-of-fortune",
        "Wheel of Fortune",
        "Cycles, turning points, luck in motion",
        "Resistance to change, a cycle repeating",
    ),
    (
        11,
        "justice",
        "Justice",
        "Fairness, truth, cause and effect",
        "Imbalance, accountability avoided",
    ),
    (
        12,
        "hanged-man",
        "The Hanged Man",
        "Surrender, a new perspective, pause",
        "Stalling, sacrifice without purpose",
    ),
    (
        13,
        "death",
        "Death",
        "Endings that clear the way, transformation",
        "Clinging to what is already over",
    ),
    (
        14,
        "temperance",
        "Temperance",
        "Moderation, patience, synthesis",
        "Excess, imbalance, impatience",
    ),
    (
        15,
        "devil",
        "The Devil",
        "Attachment, temptation, self-imposed limits",
        "Release from what binds, power reclaimed",
    ),
    (
        16,
        "tower",
        "The Tower",
        "Sudden upheaval, revelation, collapse of the false",
        "Disaster resisted, change postponed",
    ),
    (
        17,
        "star",
        "The Star",
        "Hope, renewal, quiet faith",
        "Discouragement, faith tested",
    ),
    (
        18,
        "moon",
        "The Moon",
        "Illusion, dreams, the unconscious",
        "Confusion lifting, fear released",
    ),
    (
        19,
        "sun",
        "The Sun",
        "Vitality, clarity, success",
        "Dimmed joy, success delayed",
    ),
    (
        20,
        "judgement",
        "Judgement",
        "Awakening, reckoning, a call answered",
        "Self-doubt, a call ignored",
    ),
    (
        21,
        "world",
        "The World",
        "Completion, integration, arrival",
        "Loose ends, a journey unfinished",
    ),
];

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 78;

/// An ordered sequence of the 78 unique cards. The pre-shuffle order is
/// fixed: majors 0 through 21, then each suit Ace through King.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 78-card deck. Always the same cards in the same
    /// order; callers shuffle a copy.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for (number, slug, name, upright, reversed) in MAJOR_CARDS {
            cards.push(Card::major(*number, slug, name, upright, reversed));
        }
        for suit in Suit::all() {
            for rank in Rank::all() {
                cards.push(Card::minor(*suit, *rank));
            }
        }
        Self { cards }
    }

    /// The cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty (never true for a standard deck).
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::card::Arcana;

    #[test]
    fn deck_has_78_cards() {
        assert_eq!(Deck::standard().len(), DECK_SIZE);
    }

    #[test]
    fn arcana_counts_fixed() {
        let deck = Deck::standard();
        let majors = deck
            .cards()
            .iter()
            .filter(|c| c.arcana == Arcana::Major)
            .count();
        let minors = deck
            .cards()
            .iter()
            .filter(|c| c.arcana == Arcana::Minor)
            .count();
        assert_eq!(majors, 22);
        assert_eq!(minors, 56);
    }

    #[test]
    fn fourteen_cards_per_suit() {
        let deck = Deck::standard();
        for suit in Suit::all() {
            let count = deck
                .cards()
                .iter()
                .filter(|c| c.suit == Some(*suit))
                .count();
            assert_eq!(count, 14, "{suit}");
        }
    }

    #[test]
    fn ids_unique() {
        let deck = Deck::standard();
        let ids: HashSet<&str> = deck.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn order_stable_across_builds() {
        assert_eq!(Deck::standard(), Deck::standard());
    }

    #[test]
    fn majors_lead_in_numbered_order() {
        let deck = Deck::standard();
        assert_eq!(deck.cards()[0].id, "0-fool");
        assert_eq!(deck.cards()[21].id, "21-world");
        assert_eq!(deck.cards()[22].id, "wands-ace");
        assert_eq!(deck.cards()[77].id, "pentacles-king");
    }

    #[test]
    fn major_table_complete() {
        assert_eq!(MAJOR_CARDS.len(), 22);
        for (i, entry) in MAJOR_CARDS.iter().enumerate() {
            assert_eq!(entry.0 as usize, i);
            assert!(!entry.3.is_empty());
            assert!(!entry.4.is_empty());
        }
    }
}
