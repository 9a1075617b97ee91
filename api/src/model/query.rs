use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct QueryRequest {
    #[garde(length(min = 1))]
    pub text: String,
}

/// Body for `POST /query`. Both arms serialize flat, so callers see one
/// shape discriminated by the `success` flag.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QueryReply {
    Matched(QueryResponse),
    Unmatched(UnmatchedResponse),
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub success: bool,
    pub voice_text: String,
    pub query_type: &'static str,
    pub description: &'static str,
    pub sql_query: String,
    pub database_result: serde_json::Value,
    pub tts_text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UnmatchedResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    pub timestamp: DateTime<Utc>,
}
