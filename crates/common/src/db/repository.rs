//! Repository pattern for expert directory access
//!
//! All operations are reads; the directory is populated by an external
//! import pipeline.

use crate::chat::matcher::MatchQuery;
use crate::db::models::{Expert, ExpertColumn, ExpertEntity};
use crate::db::DbPool;
use crate::errors::Result;
use sea_orm::sea_query::{BinOper, Expr, SimpleExpr};
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

/// Fields a keyword may match against, in query order.
const MATCH_COLUMNS: [ExpertColumn; 4] = [
    ExpertColumn::Domain,
    ExpertColumn::About,
    ExpertColumn::Name,
    ExpertColumn::Location,
];

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Expert Matching (chat pipeline)
    // ========================================================================

    /// Find experts matching every keyword of the query (AND across
    /// keywords, OR across fields per keyword). Whole-word, case-insensitive.
    /// Result order is whatever the store returns; no ranking is applied.
    pub async fn search_experts(&self, query: &MatchQuery, limit: u64) -> Result<Vec<Expert>> {
        let mut condition = Condition::all();

        for pattern in query.sql_patterns() {
            let mut any_field = Condition::any();
            for column in MATCH_COLUMNS {
                any_field = any_field.add(
                    Expr::col(column).binary(BinOper::Custom("~*"), Expr::val(pattern.clone())),
                );
            }
            condition = condition.add(any_field);
        }

        ExpertEntity::find()
            .filter(condition)
            .limit(limit)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Directory Listing
    // ========================================================================

    /// List experts with pagination; returns the page and the total count.
    pub async fn list_experts(&self, offset: u64, limit: u64) -> Result<(Vec<Expert>, u64)> {
        let total = ExpertEntity::find().count(self.read_conn()).await?;

        let experts = ExpertEntity::find()
            .order_by_asc(ExpertColumn::Name)
            .offset(offset)
            .limit(limit)
            .all(self.read_conn())
            .await?;

        Ok((experts, total))
    }

    /// Find expert by ID
    pub async fn find_expert_by_id(&self, id: Uuid) -> Result<Option<Expert>> {
        ExpertEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Experts whose name or domain contains the search term
    /// (case-insensitive substring).
    pub async fn recommended_experts(&self, term: &str, limit: u64) -> Result<Vec<Expert>> {
        let pattern = regex_lite::escape(term);

        let condition = Condition::any()
            .add(
                Expr::col(ExpertColumn::Name)
                    .binary(BinOper::Custom("~*"), Expr::val(pattern.clone())),
            )
            .add(
                Expr::col(ExpertColumn::Domain)
                    .binary(BinOper::Custom("~*"), Expr::val(pattern)),
            );

        ExpertEntity::find()
            .filter(condition)
            .limit(limit)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// First experts in store order; the directory has no popularity
    /// signal yet.
    pub async fn trending_experts(&self, limit: u64) -> Result<Vec<Expert>> {
        ExpertEntity::find()
            .limit(limit)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Random sample of experts, used as the recommendations fallback.
    pub async fn random_experts(&self, limit: u64) -> Result<Vec<Expert>> {
        let random_order: SimpleExpr = Expr::cust("RANDOM()");
        ExpertEntity::find()
            .order_by(random_order, Order::Asc)
            .limit(limit)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }
}
