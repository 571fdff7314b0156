use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Transfer payload, wire-compatible with the original
/// `{from, to, sum}` DTO. Sum is in minor units.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTransferRequest {
    #[serde(rename = "from")]
    #[validate(length(min = 16, max = 19, message = "source card number has a wrong length"))]
    pub card_from: String,

    #[serde(rename = "to")]
    #[validate(length(min = 16, max = 19, message = "destination card number has a wrong length"))]
    pub card_to: String,

    #[serde(rename = "sum")]
    #[validate(range(min = 1, message = "sum must be positive"))]
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct FindTransactionsByCard {
    pub card: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::validation_error_messages;

    #[test]
    fn zero_sum_is_rejected() {
        let req = CreateTransferRequest {
            card_from: "4083960000000000".to_string(),
            card_to: "4083960000000018".to_string(),
            amount: 0,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn errors_use_wire_field_names() {
        let req = CreateTransferRequest {
            card_from: "4083".to_string(),
            card_to: "4083960000000018".to_string(),
            amount: 0,
        };

        let messages = validation_error_messages(&req.validate().unwrap_err());

        assert!(messages.iter().any(|m| m.starts_with("from:")));
        assert!(messages.iter().any(|m| m.starts_with("sum:")));
        assert!(!messages.iter().any(|m| m.starts_with("card_from")));
    }

    #[test]
    fn wire_names_match_the_post_dto() {
        let req: CreateTransferRequest = serde_json::from_str(
            r#"{"from":"4083960000000000","to":"4083960000000018","sum":10}"#,
        )
        .unwrap();

        assert_eq!(req.amount, 10);
    }
}
