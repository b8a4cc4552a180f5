use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::error::ScheduleError;
use crate::types::SchedulerEvent;

/// Schedule compiled into the binary, used when no events file is configured
const BUILTIN_EVENTS: &str = include_str!("../data/events.json");

/// Parse the built-in schedule
pub fn builtin_events() -> Result<Vec<SchedulerEvent>> {
    parse_events(BUILTIN_EVENTS).context("Failed to parse built-in events")
}

/// Load events from a JSON file holding an array of events
pub fn load_events(path: &Path) -> Result<Vec<SchedulerEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file {}", path.display()))?;
    let events = parse_events(&content)
        .with_context(|| format!("Failed to parse events file {}", path.display()))?;

    debug!(count = events.len(), path = %path.display(), "Loaded events");
    Ok(events)
}

/// Load from `path` if given, otherwise fall back to the built-in schedule
pub fn load_or_builtin(path: Option<&Path>) -> Result<Vec<SchedulerEvent>> {
    match path {
        Some(p) => load_events(p),
        None => builtin_events(),
    }
}

fn parse_events(content: &str) -> Result<Vec<SchedulerEvent>> {
    let events: Vec<SchedulerEvent> = serde_json::from_str(content)?;
    validate(&events)?;
    Ok(events)
}

/// Reject duplicate ids and events that end before they start
pub fn validate(events: &[SchedulerEvent]) -> Result<(), ScheduleError> {
    let mut seen: HashSet<u32> = HashSet::new();

    for event in events {
        if !seen.insert(event.id) {
            return Err(ScheduleError::DuplicateId(event.id));
        }
        if event.end < event.start {
            return Err(ScheduleError::InvertedRange { id: event.id });
        }
    }

    Ok(())
}

/// Look up an event by id
pub fn find_event(events: &[SchedulerEvent], id: u32) -> Option<&SchedulerEvent> {
    events.iter().find(|e| e.id == id)
}
