pub mod card;
pub mod transaction;
pub mod user;
