mod command;
mod query;

pub use self::command::{DynProductCodeCommandService, ProductCodeCommandServiceTrait};
pub use self::query::{DynProductCodeQueryService, ProductCodeQueryServiceTrait};
