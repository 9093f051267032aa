use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcanum_core::{draw, reading_signature};

pub fn run(question: &str, count: usize, json: bool) -> Result<(), String> {
    let cards = draw(question, count);

    if json {
        let out = serde_json::to_string_pretty(&cards)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Orientation", "Meaning"]);
    for drawn in &cards {
        table.add_row(vec![
            drawn.position.as_str(),
            drawn.card.name.as_str(),
            drawn.orientation(),
            drawn.meaning(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Signature: {}", reading_signature(&cards).bold());

    Ok(())
}
