use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable ledger row for a card-to-card transfer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub transaction_id: i32,
    pub transaction_no: Uuid,
    pub card_from: String,
    pub card_to: String,
    pub amount: i64,
    pub transaction_time: NaiveDateTime,
    pub created_at: Option<NaiveDateTime>,
}
