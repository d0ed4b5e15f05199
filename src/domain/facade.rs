use crate::domain::events::{AppEvent, EventBus};
use crate::domain::models::{RecipeDetails, RecipeQuery, RecipeSummary};
use crate::error::Result;
use crate::providers::RecipeProvider;
use crate::ranking::RankStrategy;

/// Entry point for the presentation layer: sequences provider calls,
/// ranking, and event emission. Wire observers into the bus before
/// constructing the facade.
pub struct RecipeFacade<P: RecipeProvider> {
    provider: P,
    bus: EventBus,
}

impl<P: RecipeProvider> RecipeFacade<P> {
    pub fn new(provider: P, bus: EventBus) -> Self {
        RecipeFacade { provider, bus }
    }

    /// Fetch, rank, truncate. Provider failures propagate; ranking itself
    /// cannot fail.
    pub async fn search(
        &self,
        query: &RecipeQuery,
        strategy: &dyn RankStrategy,
        top_n: usize,
    ) -> Result<Vec<RecipeSummary>> {
        self.bus.emit(&AppEvent::SearchStarted);
        let recipes = self.provider.search(query).await?;
        self.bus.emit(&AppEvent::SearchSucceeded {
            count: recipes.len(),
        });

        let ranked = strategy.rank(recipes, query, top_n);
        self.bus.emit(&AppEvent::RankCompleted {
            strategy: strategy.name().to_string(),
        });
        Ok(ranked)
    }

    pub async fn details(&self, recipe_id: &str) -> Result<RecipeDetails> {
        self.bus.emit(&AppEvent::DetailsStarted {
            id: recipe_id.to_string(),
        });
        let details = self.provider.details(recipe_id).await?;
        self.bus.emit(&AppEvent::DetailsSucceeded {
            id: recipe_id.to_string(),
        });
        Ok(details)
    }
}
