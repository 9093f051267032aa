//! Core types for Arcanum: the tarot card catalog, a reproducible seeded
//! RNG, and the deterministic draw engine.
//!
//! Everything here is synchronous and pure: a question string plus a card
//! count fully determine a spread, with no ambient state. IO, narrative
//! generation, and persistence live in the sibling crates.

/// Card types: arcana, suits, ranks, and the catalog entry.
pub mod card;
/// The fixed 78-card deck.
pub mod deck;
/// The draw engine and spread types.
pub mod draw;
/// Seeded RNG and the question hash.
pub mod rng;
/// Seeded Fisher-Yates shuffle.
pub mod shuffle;
/// Spread signatures for caching and dedup.
pub mod signature;

/// Re-export card types.
pub use card::{Arcana, Card, Rank, Suit};
/// Re-export the deck.
pub use deck::{DECK_SIZE, Deck};
/// Re-export draw types.
pub use draw::{DEFAULT_SPREAD_SIZE, DrawnCard, Reading, SPREAD_POSITIONS, draw, position_label};
/// Re-export RNG types.
pub use rng::{SeededRng, question_seed};
/// Re-export the shuffle.
pub use shuffle::shuffle;
/// Re-export the signature derivation.
pub use signature::reading_signature;
