//! Card types: arcana, suits, ranks, and the immutable catalog entry.

use serde::{Deserialize, Serialize};

/// The two card categories of a tarot deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    /// The 22 numbered thematic cards (The Fool through The World).
    Major,
    /// The 56 suited cards (Ace through King in four suits).
    Minor,
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "Major"),
            Self::Minor => write!(f, "Minor"),
        }
    }
}

/// The four minor-arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Fire suit: will, ambition, creative drive.
    Wands,
    /// Water suit: emotion, relationships, intuition.
    Cups,
    /// Air suit: intellect, conflict, truth.
    Swords,
    /// Earth suit: work, resources, the material world.
    Pentacles,
}

impl Suit {
    /// All suits in deck order.
    pub fn all() -> &'static [Self] {
        &[Self::Wands, Self::Cups, Self::Swords, Self::Pentacles]
    }

    /// Lowercase identifier fragment for this suit.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    /// The thematic domain this suit speaks to, used when composing
    /// minor-arcana meaning texts.
    pub fn theme(self) -> &'static str {
        match self {
            Self::Wands => "passion, drive, and creative will",
            Self::Cups => "emotion, relationships, and intuition",
            Self::Swords => "intellect, conflict, and truth",
            Self::Pentacles => "work, resources, and the material world",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// The fourteen ranks of a minor-arcana suit, Ace through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// One: the seed of the suit.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page: the student of the suit.
    Page,
    /// Knight: the pursuer of the suit.
    Knight,
    /// Queen: inward mastery of the suit.
    Queen,
    /// King: outward command of the suit.
    King,
}

impl Rank {
    /// All ranks in deck order, Ace through King.
    pub fn all() -> &'static [Self] {
        &[
            Self::Ace,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Page,
            Self::Knight,
            Self::Queen,
            Self::King,
        ]
    }

    /// Numeric value within the suit: Ace = 1 through King = 14.
    pub fn number(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Page => 11,
            Self::Knight => 12,
            Self::Queen => 13,
            Self::King => 14,
        }
    }

    /// Lowercase identifier fragment for this rank.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Page => "page",
            Self::Knight => "knight",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Upright keyword phrase for this rank.
    pub fn upright_phrase(self) -> &'static str {
        match self {
            Self::Ace => "A fresh beginning",
            Self::Two => "Balance and choice",
            Self::Three => "Growth and collaboration",
            Self::Four => "Stability and consolidation",
            Self::Five => "Conflict and loss",
            Self::Six => "Harmony and progress",
            Self::Seven => "Assessment and perseverance",
            Self::Eight => "Movement and mastery",
            Self::Nine => "Fruition and resilience",
            Self::Ten => "Completion and legacy",
            Self::Page => "Curiosity and news",
            Self::Knight => "Pursuit and momentum",
            Self::Queen => "Nurture and inward mastery",
            Self::King => "Authority and command",
        }
    }

    /// Reversed keyword phrase for this rank.
    pub fn reversed_phrase(self) -> &'static str {
        match self {
            Self::Ace => "A delayed or misdirected start",
            Self::Two => "Indecision and imbalance",
            Self::Three => "Friction and scattered effort",
            Self::Four => "Stagnation and restlessness",
            Self::Five => "Slow recovery from hardship",
            Self::Six => "Nostalgia and resistance to change",
            Self::Seven => "Doubt and hesitation",
            Self::Eight => "Feeling trapped or rushed",
            Self::Nine => "Burnout and anxiety",
            Self::Ten => "Burdens carried too long",
            Self::Page => "Immaturity and false starts",
            Self::Knight => "Recklessness or delay",
            Self::Queen => "Dependence and insecurity",
            Self::King => "Rigidity and misuse of power",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ace => write!(f, "Ace"),
            Self::Two => write!(f, "Two"),
            Self::Three => write!(f, "Three"),
            Self::Four => write!(f, "Four"),
            Self::Five => write!(f, "Five"),
            Self::Six => write!(f, "Six"),
            Self::Seven => write!(f, "Seven"),
            Self::Eight => write!(f, "Eight"),
            Self::Nine => write!(f, "Nine"),
            Self::Ten => write!(f, "Ten"),
            Self::Page => write!(f, "Page"),
            Self::Knight => write!(f, "Knight"),
            Self::Queen => write!(f, "Queen"),
            Self::King => write!(f, "King"),
        }
    }
}

/// An immutable catalog entry. Defined once at deck construction and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier, e.g. `"0-fool"` or `"cups-king"`.
    pub id: String,
    /// Display name, e.g. `"The Fool"` or `"King of Cups"`.
    pub name: String,
    /// Which arcana the card belongs to.
    pub arcana: Arcana,
    /// The suit, for minor-arcana cards only.
    pub suit: Option<Suit>,
    /// Major: 0-21. Minor: 1-14 within the suit.
    pub number: u8,
    /// Meaning text when the card lands upright.
    pub upright: String,
    /// Meaning text when the card lands reversed.
    pub reversed: String,
}

impl Card {
    /// Construct a major-arcana card.
    pub fn major(number: u8, slug: &str, name: &str, upright: &str, reversed: &str) -> Self {
        Self {
            id: format!("{number}-{slug}"),
            name: name.to_string(),
            arcana: Arcana::Major,
            suit: None,
            number,
            upright: upright.to_string(),
            reversed: reversed.to_string(),
        }
    }

    /// Construct a minor-arcana card; the meaning texts are composed from
    /// the rank keywords and the suit theme.
    pub fn minor(suit: Suit, rank: Rank) -> Self {
        Self {
            id: format!("{}-{}", suit.slug(), rank.slug()),
            name: format!("{rank} of {suit}"),
            arcana: Arcana::Minor,
            suit: Some(suit),
            number: rank.number(),
            upright: format!("{} expressed through {}", rank.upright_phrase(), suit.theme()),
            reversed: format!("{} in matters of {}", rank.reversed_phrase(), suit.theme()),
        }
    }
}
