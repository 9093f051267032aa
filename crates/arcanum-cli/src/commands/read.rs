use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcanum_core::{draw, reading_signature};
use arcanum_narrative::{
    Locale, NarrativeRequest, NarrativeSource, TemplateNarrator, format_deep_reading,
};
use arcanum_session::{FileStore, SessionCache};

pub fn run(
    question: &str,
    count: usize,
    locale_code: &str,
    store_path: &Path,
    json: bool,
) -> Result<(), String> {
    let locale = Locale::parse(locale_code);
    let cards = draw(question, count);
    let signature = reading_signature(&cards);
    let mut cache = SessionCache::new(FileStore::new(store_path));

    let narrator = TemplateNarrator::new();
    let request = NarrativeRequest {
        locale,
        question,
        cards: &cards,
    };
    let narrative = match narrator.deep_reading(&request) {
        Ok(raw) => format_deep_reading(locale, &raw),
        Err(e) => {
            // A failed provider falls back to the last cached narrative
            // for this exact reading.
            let key = SessionCache::<FileStore>::cache_key(question, &signature);
            match cache.load(&key).and_then(|s| s.deep_analysis) {
                Some(cached) => cached,
                None => return Err(format!("no narrative available: {e}")),
            }
        }
    };

    if let Err(e) = cache.store_deep_analysis(question, &signature, &narrative) {
        log::warn!("failed to cache the reading: {e}");
    }

    if json {
        let out = serde_json::json!({
            "question": question,
            "locale": locale,
            "signature": signature,
            "cards": cards,
            "narrative": narrative,
        });
        let rendered = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{rendered}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Orientation"]);
    for drawn in &cards {
        table.add_row(vec![
            drawn.position.as_str(),
            drawn.card.name.as_str(),
            drawn.orientation(),
        ]);
    }

    println!("{table}");
    println!();
    println!("{narrative}");
    println!();
    println!("  Signature: {}", signature.bold());

    Ok(())
}
