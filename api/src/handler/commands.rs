use crate::model::commands::{CommandEntry, SupportedCommandsResponse};
use axum::Json;
use chrono::Utc;
use nlp::IntentKind;
use strum::IntoEnumIterator;

/// Catalog of every supported intent with example phrasings.
pub async fn supported_commands() -> Json<SupportedCommandsResponse> {
    let commands = IntentKind::iter()
        .map(|kind| {
            (
                kind.key(),
                CommandEntry {
                    description: kind.description(),
                    patterns: kind.examples().to_vec(),
                },
            )
        })
        .collect();

    Json(SupportedCommandsResponse {
        success: true,
        commands,
        timestamp: Utc::now(),
    })
}
