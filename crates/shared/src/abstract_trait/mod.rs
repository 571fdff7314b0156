pub mod auth;
pub mod card;
pub mod hashing;
pub mod health;
pub mod jwt;
pub mod transaction;
pub mod user;
