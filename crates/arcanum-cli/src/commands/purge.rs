use std::path::Path;

use arcanum_session::{FileStore, SessionCache};

pub fn run(store_path: &Path) -> Result<(), String> {
    let mut cache = SessionCache::new(FileStore::new(store_path));
    let removed = cache
        .purge_stale()
        .map_err(|e| format!("purge failed: {e}"))?;

    println!("  Removed {removed} expired sessions");
    Ok(())
}
