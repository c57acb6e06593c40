pub mod actions;
pub mod pools;
pub mod roll;
pub mod stats;

use std::path::Path;

use bitd_core::{InMemoryRegistry, Roster};

/// Read a roster file into a registry.
fn load_roster(path: &Path) -> Result<InMemoryRegistry, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let registry = Roster::from_json(&text)
        .and_then(Roster::into_registry)
        .map_err(|e| format!("{}: {e}", path.display()))?;

    tracing::debug!(path = %path.display(), actors = registry.len(), "roster loaded");
    Ok(registry)
}
