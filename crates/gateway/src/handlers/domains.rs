//! Domain handlers

use axum::Json;
use serde::Serialize;

#[derive(Serialize, Clone)]
pub struct TrendingDomain {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
}

/// GET /api/domains/trending - curated list shown on the landing page
pub async fn trending() -> Json<Vec<TrendingDomain>> {
    Json(vec![
        TrendingDomain { id: 1, name: "Artificial Intelligence", icon: "🤖" },
        TrendingDomain { id: 2, name: "Frontend Developer", icon: "💻" },
        TrendingDomain { id: 3, name: "Data Scientist", icon: "📊" },
        TrendingDomain { id: 4, name: "DevOps Engineer", icon: "🔧" },
        TrendingDomain { id: 5, name: "UI/UX Designer", icon: "🎨" },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trending_is_stable() {
        let Json(domains) = trending().await;
        assert_eq!(domains.len(), 5);
        assert_eq!(domains[0].name, "Artificial Intelligence");
    }
}
