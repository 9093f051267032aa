//! Deterministic fingerprints for a drawn spread.

use crate::draw::DrawnCard;

/// Derive the signature of an ordered spread.
///
/// Each card contributes `"<index>:<card id>:<U|R>"`; segments join with
/// `"|"`. Identical spreads (same cards, same order, same orientations)
/// always produce the identical string, which makes the signature usable as
/// a cache and dedup key.
pub fn reading_signature(cards: &[DrawnCard]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, drawn)| {
            let orientation = if drawn.reversed { "R" } else { "U" };
            format!("{index}:{}:{orientation}", drawn.card.id)
        })
        .collect::<Vec<String>>()
        .join("|")
}
