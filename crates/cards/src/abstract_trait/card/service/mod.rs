pub mod command;
pub mod query;

pub use self::command::{CardCommandServiceTrait, DynCardCommandService};
pub use self::query::{CardQueryServiceTrait, DynCardQueryService};
