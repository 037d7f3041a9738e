//! Chat handler
//!
//! One request, one pass through the pipeline: classify the last user
//! turn, short-circuit canned lanes, otherwise run the expert directory
//! query and the completion call concurrently and assemble `{ ai, experts }`.
//! Both external calls fail soft: a completion failure becomes the
//! apology reply, a directory failure becomes an empty expert list.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use validator::Validate;

use crate::AppState;
use expertlink_common::{
    chat::{assembler, classify, prompt, MatchQuery},
    db::models::Expert,
    errors::{AppError, Result},
    metrics,
    Repository,
};

/// Chat request: an ordered conversation; only the last turn drives
/// classification.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub messages: Vec<ChatTurn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// Chat response
#[derive(Serialize)]
pub struct ChatResponse {
    pub ai: String,
    pub experts: Vec<Expert>,
}

/// Handle one chat turn
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let start = Instant::now();

    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: None,
    })?;

    // An absent or empty message list classifies like any other
    // zero-keyword input; it is not an error.
    let last_message = request
        .messages
        .last()
        .map(|turn| turn.content.as_str())
        .unwrap_or("");

    let classification = classify(&state.lexicon, last_message);
    let lane = classification.lane;

    // Greeting and FAQ lanes never touch the directory or the model
    if let Some(reply) = assembler::canned_reply(&lane) {
        let elapsed = start.elapsed().as_secs_f64();
        metrics::record_chat(elapsed, lane.label(), 0);

        tracing::info!(
            lane = lane.label(),
            latency_ms = (elapsed * 1000.0) as u64,
            "Chat served from canned reply"
        );

        return Ok(Json(ChatResponse {
            ai: reply.to_string(),
            experts: Vec::new(),
        }));
    }

    let repo = Repository::new(state.db.clone());
    let system_prompt = prompt::system_prompt(&lane);
    let expert_limit = state.config.chat.expert_limit;

    // The directory read and the completion round trip are independent;
    // issue them together.
    let experts_fut = async {
        if !lane.wants_experts() {
            return Vec::new();
        }
        let Some(query) = MatchQuery::new(&classification.keywords) else {
            return Vec::new();
        };
        match repo.search_experts(&query, expert_limit).await {
            Ok(experts) => {
                metrics::record_directory_query(true);
                experts
            }
            Err(e) => {
                metrics::record_directory_query(false);
                tracing::error!(error = %e, "Expert directory query failed");
                Vec::new()
            }
        }
    };

    let completion_fut = async {
        let call_start = Instant::now();
        let result = state.completion.complete(&system_prompt, last_message).await;
        metrics::record_completion(
            call_start.elapsed().as_secs_f64(),
            state.completion.model_name(),
            result.is_ok(),
        );
        result
    };

    let (experts, completion_result) = tokio::join!(experts_fut, completion_fut);

    if let Err(e) = &completion_result {
        tracing::error!(error = %e, lane = lane.label(), "Completion call failed");
    }
    let ai = assembler::assemble_reply(completion_result);

    let elapsed = start.elapsed().as_secs_f64();
    metrics::record_chat(elapsed, lane.label(), experts.len());

    tracing::info!(
        lane = lane.label(),
        keywords = classification.keywords.len(),
        experts = experts.len(),
        latency_ms = (elapsed * 1000.0) as u64,
        "Chat completed"
    );

    Ok(Json(ChatResponse { ai, experts }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_empty_body() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.messages.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_shape() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":"hi"}]}"#,
        )
        .unwrap();
        assert_eq!(request.messages.last().unwrap().content, "hi");
    }

    #[test]
    fn test_response_wire_fields() {
        let response = ChatResponse {
            ai: "Hello! How can I help you today?".to_string(),
            experts: Vec::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ai"], "Hello! How can I help you today?");
        assert!(json["experts"].as_array().unwrap().is_empty());
    }
}
