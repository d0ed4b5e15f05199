use crate::config::HttpConfig;
use crate::domain::models::{RecipeDetails, RecipeQuery, RecipeSummary};
use crate::error::Result;
use crate::providers::{Fetcher, RecipeProvider};
use crate::utils::sanitize::strip_html;
use async_trait::async_trait;
use serde::Deserialize;

pub const SOURCE_TAG: &str = "spoon";

/// Adapter for the Spoonacular-style API. Unlike MealDB, the search endpoint
/// takes ingredients, exclusions, and a free-text query in one request.
pub struct SpoonacularProvider {
    fetcher: Fetcher,
    base_url: String,
    api_key: String,
    page_size: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SpoonRecipe>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpoonRecipe {
    id: Option<i64>,
    title: Option<String>,
    image: Option<String>,
    /// HTML-formatted description returned with `addRecipeInformation=true`.
    summary: Option<String>,
    instructions: Option<String>,
    #[serde(default)]
    extended_ingredients: Option<Vec<SpoonIngredient>>,
}

#[derive(Debug, Deserialize)]
struct SpoonIngredient {
    name: Option<String>,
}

impl SpoonacularProvider {
    pub fn new(
        base_url: String,
        api_key: String,
        page_size: usize,
        http: &HttpConfig,
    ) -> Result<Self> {
        Ok(SpoonacularProvider {
            fetcher: Fetcher::new(http)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            page_size,
        })
    }

    fn search_params(&self, query: &RecipeQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("number", self.page_size.to_string()),
            ("addRecipeInformation", "true".to_string()),
        ];

        if let Some(keyword) = &query.keyword {
            params.push(("query", keyword.clone()));
        }
        if !query.have.is_empty() {
            params.push(("includeIngredients", query.have.join(",")));
        }
        if !query.exclude.is_empty() {
            params.push(("excludeIngredients", query.exclude.join(",")));
        }

        params.push(("apiKey", self.api_key.clone()));
        params
    }

    fn summary_from(recipe: &SpoonRecipe) -> RecipeSummary {
        RecipeSummary {
            id: recipe.id.map(|id| id.to_string()).unwrap_or_default(),
            title: recipe.title.as_deref().unwrap_or_default().trim().to_string(),
            image_url: recipe.image.clone(),
            source: SOURCE_TAG.to_string(),
            ingredients: ingredient_names(recipe.extended_ingredients.as_deref().unwrap_or_default()),
            description: strip_html(recipe.summary.as_deref().unwrap_or_default()),
        }
    }
}

fn ingredient_names(ingredients: &[SpoonIngredient]) -> Vec<String> {
    ingredients
        .iter()
        .filter_map(|ing| {
            let name = ing.name.as_deref().unwrap_or_default().trim().to_lowercase();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    fn source_tag(&self) -> &'static str {
        SOURCE_TAG
    }

    async fn search(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>> {
        let url = format!("{}/recipes/complexSearch", self.base_url);
        let response: SearchResponse = self
            .fetcher
            .get_json(&url, &self.search_params(query))
            .await?;

        Ok(response.results.iter().map(Self::summary_from).collect())
    }

    async fn details(&self, recipe_id: &str) -> Result<RecipeDetails> {
        let url = format!("{}/recipes/{}/information", self.base_url, recipe_id);
        let recipe: SpoonRecipe = self
            .fetcher
            .get_json(&url, &[("apiKey", self.api_key.clone())])
            .await?;

        // The primary field is blank for many records; the HTML summary is
        // the documented fallback.
        let instructions = recipe
            .instructions
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| strip_html(recipe.summary.as_deref().unwrap_or_default()));

        Ok(RecipeDetails {
            id: recipe.id.map(|id| id.to_string()).unwrap_or_default(),
            title: recipe.title.as_deref().unwrap_or_default().trim().to_string(),
            instructions,
            ingredients: ingredient_names(recipe.extended_ingredients.as_deref().unwrap_or_default()),
            image_url: recipe.image.clone(),
            source: SOURCE_TAG.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::domain::RecipeQueryBuilder;
    use serde_json::json;

    fn provider() -> SpoonacularProvider {
        SpoonacularProvider::new(
            "https://api.example.com".to_string(),
            "test-key".to_string(),
            10,
            &HttpConfig {
                timeout_seconds: 5,
                max_retries: 0,
                initial_backoff_ms: 10,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_search_params_combine_all_three_dimensions() {
        let query = RecipeQueryBuilder::new()
            .have("chicken,rice")
            .exclude("peanuts")
            .keyword("curry")
            .build()
            .unwrap();

        let params = provider().search_params(&query);
        assert!(params.contains(&("query", "curry".to_string())));
        assert!(params.contains(&("includeIngredients", "chicken,rice".to_string())));
        assert!(params.contains(&("excludeIngredients", "peanuts".to_string())));
        assert!(params.contains(&("number", "10".to_string())));
        assert!(params.contains(&("addRecipeInformation", "true".to_string())));
        assert!(params.contains(&("apiKey", "test-key".to_string())));
    }

    #[test]
    fn test_search_params_omit_absent_dimensions() {
        let query = RecipeQueryBuilder::new().have("chicken").build().unwrap();
        let params = provider().search_params(&query);

        assert!(!params.iter().any(|(key, _)| *key == "query"));
        assert!(!params.iter().any(|(key, _)| *key == "excludeIngredients"));
    }

    #[test]
    fn test_summary_strips_html_and_normalizes_ingredients() {
        let recipe: SpoonRecipe = serde_json::from_value(json!({
            "id": 641803,
            "title": "Spicy Tacos ",
            "image": "https://img.example.com/taco.jpg",
            "summary": "<b>Spicy</b> &amp; tasty<br/>Done.",
            "extendedIngredients": [
                {"name": " Beef "},
                {"name": ""},
                {"name": null},
                {"name": "tortillas"}
            ]
        }))
        .unwrap();

        let summary = SpoonacularProvider::summary_from(&recipe);
        assert_eq!(summary.id, "641803");
        assert_eq!(summary.title, "Spicy Tacos");
        assert_eq!(summary.description, "Spicy & tastyDone.");
        assert_eq!(summary.ingredients, vec!["beef", "tortillas"]);
    }

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let recipe: SpoonRecipe = serde_json::from_value(json!({})).unwrap();
        let summary = SpoonacularProvider::summary_from(&recipe);

        assert_eq!(summary.id, "");
        assert_eq!(summary.title, "");
        assert!(summary.ingredients.is_empty());
        assert_eq!(summary.description, "");
    }
}
