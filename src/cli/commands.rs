use crate::config::Settings;
use crate::domain::events::{AppEvent, EventBus};
use crate::domain::facade::RecipeFacade;
use crate::domain::models::{RecipeDetails, RecipeSummary};
use crate::domain::query_builder::RecipeQueryBuilder;
use crate::error::Result;
use crate::providers::{
    CachedProvider, CombinedProvider, MealDbProvider, RecipeProvider, SpoonacularProvider,
};
use crate::ranking;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

type AppFacade = RecipeFacade<CachedProvider<CombinedProvider>>;

/// Assemble the provider stack: adapters → combined fan-out → TTL cache →
/// facade. Spoonacular joins only when a key is configured; the combined
/// provider works fine with a single adapter.
pub fn build_facade(settings: &Settings, bus: EventBus) -> Result<AppFacade> {
    let mut providers: Vec<Arc<dyn RecipeProvider>> = vec![Arc::new(MealDbProvider::new(
        settings.providers.mealdb_url.clone(),
        &settings.http,
    )?)];

    match &settings.providers.spoonacular_api_key {
        Some(api_key) => {
            providers.push(Arc::new(SpoonacularProvider::new(
                settings.providers.spoonacular_url.clone(),
                api_key.clone(),
                settings.results.provider_page_size,
                &settings.http,
            )?));
        }
        None => {
            info!("SPOONACULAR_API_KEY not set; Spoonacular provider disabled");
        }
    }

    let combined = CombinedProvider::new(providers);
    let cached = CachedProvider::new(combined, Duration::from_secs(settings.cache.ttl_seconds));
    Ok(RecipeFacade::new(cached, bus))
}

/// Status observer wired into the event bus for CLI runs.
pub fn log_event(event: &AppEvent) {
    match event {
        AppEvent::SearchStarted => info!("Searching providers"),
        AppEvent::SearchSucceeded { count } => info!("Fetched {count} recipes"),
        AppEvent::DetailsStarted { id } => info!("Looking up {id}"),
        AppEvent::DetailsSucceeded { id } => debug!("Details resolved for {id}"),
        AppEvent::RankCompleted { strategy } => debug!("Ranked with {strategy}"),
    }
}

pub async fn search(
    facade: &AppFacade,
    settings: &Settings,
    have: Option<String>,
    exclude: Option<String>,
    keyword: Option<String>,
    strategy_name: &str,
    limit: Option<usize>,
) -> Result<()> {
    let mut builder = RecipeQueryBuilder::new()
        .with_limit(limit.unwrap_or(settings.results.default_limit));

    if let Some(csv) = have {
        builder = builder.have(&csv);
    }
    if let Some(csv) = exclude {
        builder = builder.exclude(&csv);
    }
    if let Some(text) = keyword {
        builder = builder.keyword(&text);
    }

    let top_n = builder.limit();
    let query = builder.build()?;
    let strategy = ranking::by_name(strategy_name)?;

    let results = facade.search(&query, strategy, top_n).await?;
    print_search_results(&results);
    Ok(())
}

pub async fn details(facade: &AppFacade, recipe_id: &str) -> Result<()> {
    let details = facade.details(recipe_id).await?;
    print_details(&details);
    Ok(())
}

fn print_search_results(results: &[RecipeSummary]) {
    if results.is_empty() {
        println!("No recipes found.");
        return;
    }

    println!("Found {} recipes:\n", results.len());
    for (index, recipe) in results.iter().enumerate() {
        println!("{}. {} [{}]", index + 1, recipe.title, recipe.id);
        if !recipe.ingredients.is_empty() {
            println!("   ingredients: {}", recipe.ingredients.join(", "));
        }
        if let Some(image_url) = &recipe.image_url {
            println!("   image: {image_url}");
        }
        println!();
    }
}

fn print_details(details: &RecipeDetails) {
    println!("{} [{}]", details.title, details.id);
    println!("source: {}", details.source);
    if let Some(image_url) = &details.image_url {
        println!("image: {image_url}");
    }
    if !details.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &details.ingredients {
            println!("  - {ingredient}");
        }
    }
    if !details.instructions.is_empty() {
        println!("\nInstructions:\n{}", details.instructions);
    }
}
