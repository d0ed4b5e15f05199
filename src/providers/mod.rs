pub mod cached;
pub mod combined;
pub mod fetcher;
pub mod mealdb;
pub mod spoonacular;

pub use cached::CachedProvider;
pub use combined::CombinedProvider;
pub use fetcher::Fetcher;
pub use mealdb::MealDbProvider;
pub use spoonacular::SpoonacularProvider;

use crate::domain::models::{RecipeDetails, RecipeQuery, RecipeSummary};
use crate::error::Result;
use async_trait::async_trait;

/// Common capability of every recipe source: search plus a details lookup.
///
/// Adapters interpret the `details` id as their provider-local id; the
/// combined provider interprets it as a composite `<source>:<local-id>` and
/// routes on the tag. Decorators pass it through unchanged.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Fixed short tag identifying this source, used as the composite id
    /// prefix. Must not contain a colon.
    fn source_tag(&self) -> &'static str;

    async fn search(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>>;

    async fn details(&self, recipe_id: &str) -> Result<RecipeDetails>;
}
