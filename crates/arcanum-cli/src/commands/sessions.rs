use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use arcanum_session::{FileStore, SessionCache};

pub fn run(store_path: &Path) -> Result<(), String> {
    let mut cache = SessionCache::new(FileStore::new(store_path));
    let sessions = cache.sessions();

    if sessions.is_empty() {
        println!("  No cached sessions.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Question", "Unlocked", "Analysis", "Updated"]);

    for session in &sessions {
        table.add_row(vec![
            session.question.clone(),
            if session.has_unlocked_reward { "yes" } else { "no" }.to_string(),
            if session.deep_analysis.is_some() { "cached" } else { "—" }.to_string(),
            session.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} sessions", sessions.len());

    Ok(())
}
