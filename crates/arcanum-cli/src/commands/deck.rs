use comfy_table::{ContentArrangement, Table};

use arcanum_core::Deck;

pub fn run() -> Result<(), String> {
    let deck = Deck::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Arcana", "Suit", "Upright"]);

    for card in deck.cards() {
        let suit = match card.suit {
            Some(suit) => suit.to_string(),
            None => "—".to_string(),
        };
        let upright = if card.upright.len() > 60 {
            format!("{}...", &card.upright[..57])
        } else {
            card.upright.clone()
        };
        table.add_row(vec![
            card.id.clone(),
            card.name.clone(),
            card.arcana.to_string(),
            suit,
            upright,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", deck.len());

    Ok(())
}
