//! Expert directory handlers
//!
//! Read-only views over the expert directory; the import pipeline owns
//! writes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use expertlink_common::{
    db::models::Expert,
    errors::{AppError, Result},
    Repository,
};

const RECOMMENDED_LIMIT: u64 = 3;
const TRENDING_LIMIT: u64 = 5;
const RECOMMENDATIONS_LIMIT: u64 = 5;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_page_size")]
    pub limit: u64,
}

fn default_page_size() -> u64 {
    50
}

#[derive(Serialize)]
pub struct ExpertListResponse {
    pub experts: Vec<Expert>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// GET /api/experts - paginated directory listing
pub async fn list_experts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ExpertListResponse>> {
    let limit = params.limit.min(200);
    let repo = Repository::new(state.db.clone());

    let (experts, total) = repo.list_experts(params.offset, limit).await?;

    Ok(Json(ExpertListResponse {
        experts,
        total,
        offset: params.offset,
        limit,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RecommendedParams {
    #[serde(default)]
    pub query: String,
}

/// GET /api/experts/recommended?query= - small sample matching a search term
pub async fn recommended(
    State(state): State<AppState>,
    Query(params): Query<RecommendedParams>,
) -> Result<Json<Vec<Expert>>> {
    let repo = Repository::new(state.db.clone());

    let experts = if params.query.is_empty() {
        repo.trending_experts(RECOMMENDED_LIMIT).await?
    } else {
        repo.recommended_experts(&params.query, RECOMMENDED_LIMIT)
            .await?
    };

    Ok(Json(experts))
}

/// GET /api/experts/trending
pub async fn trending(State(state): State<AppState>) -> Result<Json<Vec<Expert>>> {
    let repo = Repository::new(state.db.clone());
    let experts = repo.trending_experts(TRENDING_LIMIT).await?;
    Ok(Json(experts))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default, rename = "recentSearches")]
    pub recent_searches: Vec<String>,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub experts: Vec<Expert>,
}

/// POST /api/experts/recommendations - experts matching the most recent
/// search, falling back to a random sample
pub async fn recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>> {
    let repo = Repository::new(state.db.clone());

    let mut experts = match request.recent_searches.first() {
        Some(term) if !term.is_empty() => {
            repo.recommended_experts(term, RECOMMENDATIONS_LIMIT).await?
        }
        _ => Vec::new(),
    };

    if experts.is_empty() {
        experts = repo.random_experts(RECOMMENDATIONS_LIMIT).await?;
    }

    Ok(Json(RecommendationsResponse { experts }))
}

/// GET /api/experts/{id}
pub async fn get_expert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Expert>> {
    let repo = Repository::new(state.db.clone());

    let expert = repo
        .find_expert_by_id(id)
        .await?
        .ok_or_else(|| AppError::ExpertNotFound { id: id.to_string() })?;

    Ok(Json(expert))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, 50);
    }

    #[test]
    fn test_recommendations_body_field_name() {
        let request: RecommendationsRequest =
            serde_json::from_str(r#"{"recentSearches":["backend"]}"#).unwrap();
        assert_eq!(request.recent_searches, vec!["backend"]);
    }
}
