mod command;
mod query;

pub use self::command::{DynProductCodeCommandRepository, ProductCodeCommandRepositoryTrait};
pub use self::query::{DynProductCodeQueryRepository, ProductCodeQueryRepositoryTrait};
