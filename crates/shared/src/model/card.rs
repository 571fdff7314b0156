use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A card row. Balance is stored in minor units (kopecks/cents).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub card_id: i32,
    pub user_id: i32,
    pub card_number: String,
    pub card_name: String,
    pub card_type: String,
    pub currency: String,
    pub balance: i64,
    pub open_date: NaiveDateTime,
    pub validity_years: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Value record for inserting a freshly opened card.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub user_id: i32,
    pub card_number: String,
    pub card_name: String,
    pub card_type: String,
    pub currency: String,
    pub balance: i64,
    pub open_date: NaiveDateTime,
    pub validity_years: i32,
}

