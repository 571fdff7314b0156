use crate::{model::transaction::TransactionModel, utils::mask_card_number};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ledger row as seen from one card. The destination number is always
/// watermarked before leaving the service; `is_credit` is relative to the
/// card the history was queried for.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TransactionResponse {
    pub transaction_no: String,
    pub from: String,
    pub to: String,
    pub sum: i64,
    pub is_credit: bool,
    pub date_time: String,
}

impl TransactionResponse {
    pub fn from_model(model: TransactionModel, queried_card: &str) -> Self {
        let is_credit = model.card_to == queried_card;

        Self {
            transaction_no: model.transaction_no.to_string(),
            from: model.card_from,
            to: mask_card_number(&model.card_to),
            sum: model.amount,
            is_credit,
            date_time: model.transaction_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}
