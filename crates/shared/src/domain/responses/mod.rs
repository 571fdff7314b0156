mod api;
mod card;
mod health;
mod transaction;
mod user;

pub use self::api::ApiResponse;
pub use self::card::CardResponse;
pub use self::health::HealthResponse;
pub use self::transaction::TransactionResponse;
pub use self::user::{TokenResponse, UserResponse};
