use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Open-card payload. Type and currency travel as the original numeric
/// codes; a code outside the enumerated set is a field validation error,
/// not a deserialization failure, so several bad fields report together.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCardRequest {
    #[serde(rename = "name")]
    #[validate(length(min = 1, max = 255, message = "card name must not be empty"))]
    pub card_name: String,

    #[serde(rename = "type")]
    #[validate(range(min = 1, max = 4, message = "card type is out of the enumerated set"))]
    pub card_type: i32,

    #[validate(range(min = 0, max = 2, message = "currency is out of the enumerated set"))]
    pub currency: i32,
}
