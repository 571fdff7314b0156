use crate::{
    abstract_trait::health::HealthServiceTrait,
    config::ConnectionPool,
    domain::responses::{ApiResponse, HealthResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Liveness probe that also reports row counts, so a fresh deployment can be
/// told apart from a wiped database.
pub struct HealthService {
    db: ConnectionPool,
}

impl HealthService {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn count(&self, table: &str) -> Result<i64, ServiceError> {
        let query = format!("SELECT COUNT(*) FROM {table}");
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(&self.db).await.map_err(|e| {
            error!("❌ Health count of {table} failed: {e:?}");
            ServiceError::Unavailable(format!("database unreachable: {e}"))
        })?;

        Ok(count)
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> Result<ApiResponse<HealthResponse>, ServiceError> {
        let users = self.count("users").await?;
        let cards = self.count("cards").await?;
        let transactions = self.count("transactions").await?;

        info!("🔍 Health check: {users} users, {cards} cards, {transactions} transactions");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "service is healthy".to_string(),
            data: HealthResponse {
                status: "ok".to_string(),
                users,
                cards,
                transactions,
            },
        })
    }
}
