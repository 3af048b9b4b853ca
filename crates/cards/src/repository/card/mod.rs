mod command;
mod query;

pub use self::command::CardCommandRepository;
pub use self::query::CardQueryRepository;
