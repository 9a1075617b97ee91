use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// `commands` is a map keyed by intent, each entry carrying its description
/// and example phrasings.
#[derive(Debug, Serialize)]
pub struct SupportedCommandsResponse {
    pub success: bool,
    pub commands: BTreeMap<&'static str, CommandEntry>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CommandEntry {
    pub description: &'static str,
    pub patterns: Vec<&'static str>,
}
