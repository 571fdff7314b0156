mod enums;
pub mod requests;
pub mod responses;

pub use self::enums::{CardType, Currency};
