use crate::{
    domain::{CardType, Currency},
    model::card::CardModel,
    utils::expiry_string,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Card projection for the owner: full number, numeric type/currency codes
/// (original DTO contract) and the expiry rendered as `MM/YY`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CardResponse {
    pub number: String,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: i32,
    pub currency: i32,
    pub exp: String,
    pub balance: i64,
}

impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        let card_type = CardType::from_name(&model.card_type)
            .map(CardType::code)
            .unwrap_or_default();
        let currency = Currency::from_name(&model.currency)
            .map(Currency::code)
            .unwrap_or_default();

        Self {
            number: model.card_number,
            name: model.card_name,
            card_type,
            currency,
            exp: expiry_string(model.open_date.date(), model.validity_years),
            balance: model.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn card() -> CardModel {
        CardModel {
            card_id: 1,
            user_id: 1,
            card_number: "4083960000000018".to_string(),
            card_name: "my salary".to_string(),
            card_type: "VISA".to_string(),
            currency: "RUR".to_string(),
            balance: 1000,
            open_date: NaiveDate::from_ymd_opt(2019, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            validity_years: 3,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn maps_model_to_numeric_codes_and_expiry() {
        let response = CardResponse::from(card());

        assert_eq!(response.card_type, 2);
        assert_eq!(response.currency, 0);
        assert_eq!(response.exp, "01/22");
        assert_eq!(response.balance, 1000);
    }
}
