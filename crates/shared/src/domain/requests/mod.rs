pub mod auth;
pub mod card;
pub mod transaction;
