pub mod events;
pub mod facade;
pub mod models;
pub mod query_builder;

pub use events::{AppEvent, EventBus};
pub use facade::RecipeFacade;
pub use models::{RecipeDetails, RecipeQuery, RecipeSummary};
pub use query_builder::RecipeQueryBuilder;
