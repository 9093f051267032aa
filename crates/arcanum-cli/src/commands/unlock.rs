use std::path::Path;

use colored::Colorize;

use arcanum_core::{draw, reading_signature};
use arcanum_session::{FileStore, SessionCache};

pub fn run(question: &str, count: usize, store_path: &Path) -> Result<(), String> {
    let cards = draw(question, count);
    let signature = reading_signature(&cards);

    let mut cache = SessionCache::new(FileStore::new(store_path));
    let state = cache
        .mark_reward_unlocked(question, &signature)
        .map_err(|e| format!("cannot record unlock: {e}"))?;

    println!("  {} {}", "Unlocked".bold(), state.key);
    Ok(())
}
