pub mod command;
pub mod query;

pub use self::command::{CardCommandRepositoryTrait, DynCardCommandRepository};
pub use self::query::{CardQueryRepositoryTrait, DynCardQueryRepository};
