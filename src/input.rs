use crate::components::grouping::Event;
use crate::error::GroupResult;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Parse a JSON array of events
pub fn parse_events(content: &str) -> GroupResult<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(content)?;

    // Duplicate ids still group, but which copy lands where is unspecified
    let mut seen = HashSet::new();
    for event in &events {
        if !seen.insert(event.id.as_str()) {
            warn!("Duplicate event id '{}'", event.id);
        }
    }

    Ok(events)
}

/// Read a JSON array of events from a file
pub async fn load_events(path: impl AsRef<Path>) -> GroupResult<Vec<Event>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    let events = parse_events(&content)?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
