pub mod auth;
pub mod card;
pub mod health;
pub mod tariff;
pub mod transaction;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::card::{CardCommandService, CardCommandServiceDeps, CardQueryService};
pub use self::health::HealthService;
pub use self::tariff::{Tariff, TariffStore, run_tariff_refresher};
pub use self::transaction::{
    TransactionCommandService, TransactionCommandServiceDeps, TransactionQueryService,
    TransactionQueryServiceDeps,
};
