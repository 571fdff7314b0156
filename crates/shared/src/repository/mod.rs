pub mod card;
pub mod transaction;
pub mod user;

pub use self::card::{CardCommandRepository, CardQueryRepository};
pub use self::transaction::{TransactionCommandRepository, TransactionQueryRepository};
pub use self::user::{UserCommandRepository, UserQueryRepository};
