mod command;
mod query;

pub use self::command::{CardCommandService, CardCommandServiceDeps};
pub use self::query::CardQueryService;
