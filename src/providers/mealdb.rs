use crate::config::HttpConfig;
use crate::domain::models::{RecipeDetails, RecipeQuery, RecipeSummary};
use crate::error::{Error, Result};
use crate::providers::{Fetcher, RecipeProvider};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub const SOURCE_TAG: &str = "mealdb";

/// MealDB enumerates ingredients as strIngredient1..strIngredient20.
const INGREDIENT_SLOTS: usize = 20;

/// Adapter for the MealDB-style API. The search endpoint accepts a single
/// free-text term, so structured queries degrade to the keyword or, failing
/// that, the first requested ingredient.
pub struct MealDbProvider {
    fetcher: Fetcher,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    /// The API returns `"meals": null` for zero matches.
    meals: Option<Vec<Meal>>,
}

#[derive(Debug, Deserialize)]
struct Meal {
    #[serde(rename = "idMeal")]
    id: Option<String>,
    #[serde(rename = "strMeal")]
    title: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    /// Catch-all for the enumerated strIngredientN/strMeasureN pairs.
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl MealDbProvider {
    pub fn new(base_url: String, http: &HttpConfig) -> Result<Self> {
        Ok(MealDbProvider {
            fetcher: Fetcher::new(http)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn summary_from(meal: &Meal) -> RecipeSummary {
        RecipeSummary {
            id: meal.id.clone().unwrap_or_default(),
            title: meal.title.as_deref().unwrap_or_default().trim().to_string(),
            image_url: meal.thumbnail.clone(),
            source: SOURCE_TAG.to_string(),
            ingredients: ingredient_lines(meal),
            description: meal
                .instructions
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
        }
    }
}

/// One ingredient usable per call; the keyword wins when both are present.
fn search_term(query: &RecipeQuery) -> String {
    query
        .keyword
        .clone()
        .or_else(|| query.have.first().cloned())
        .unwrap_or_default()
}

/// Flatten the enumerated slots into `"<measure> <ingredient>"` lines,
/// trimmed and lowercased. Slots with neither field set are skipped.
fn ingredient_lines(meal: &Meal) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = text_field(&meal.extra, &format!("strIngredient{slot}"));
            let measure = text_field(&meal.extra, &format!("strMeasure{slot}"));
            let line = format!("{} {}", measure.trim(), ingredient.trim());
            let line = line.trim().to_lowercase();
            (!line.is_empty()).then_some(line)
        })
        .collect()
}

fn text_field<'a>(extra: &'a HashMap<String, Value>, key: &str) -> &'a str {
    extra.get(key).and_then(Value::as_str).unwrap_or("")
}

#[async_trait]
impl RecipeProvider for MealDbProvider {
    fn source_tag(&self) -> &'static str {
        SOURCE_TAG
    }

    async fn search(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>> {
        let url = format!("{}/search.php", self.base_url);
        let response: MealsResponse = self
            .fetcher
            .get_json(&url, &[("s", search_term(query))])
            .await?;

        let meals = response.meals.unwrap_or_default();
        Ok(meals.iter().map(Self::summary_from).collect())
    }

    async fn details(&self, recipe_id: &str) -> Result<RecipeDetails> {
        let url = format!("{}/lookup.php", self.base_url);
        let response: MealsResponse = self
            .fetcher
            .get_json(&url, &[("i", recipe_id.to_string())])
            .await?;

        let meals = response.meals.unwrap_or_default();
        let meal = meals
            .first()
            .ok_or_else(|| Error::NotFound(format!("Recipe id {recipe_id} not found")))?;

        Ok(RecipeDetails {
            id: meal.id.clone().unwrap_or_default(),
            title: meal.title.as_deref().unwrap_or_default().trim().to_string(),
            instructions: meal
                .instructions
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            ingredients: ingredient_lines(meal),
            image_url: meal.thumbnail.clone(),
            source: SOURCE_TAG.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeQueryBuilder;
    use serde_json::json;

    #[test]
    fn test_search_term_prefers_keyword_over_ingredients() {
        let query = RecipeQueryBuilder::new()
            .keyword("pasta")
            .have("chicken")
            .build()
            .unwrap();
        assert_eq!(search_term(&query), "pasta");

        let query = RecipeQueryBuilder::new().have("chicken,rice").build().unwrap();
        assert_eq!(search_term(&query), "chicken");
    }

    #[test]
    fn test_ingredient_lines_combine_measure_and_skip_empty_slots() {
        let meal: Meal = serde_json::from_value(json!({
            "idMeal": "52795",
            "strMeal": "Test Meal",
            "strIngredient1": "Chicken",
            "strMeasure1": "1 lb",
            "strIngredient2": " Rice ",
            "strMeasure2": " 2 cups ",
            "strIngredient3": "",
            "strMeasure3": "",
            "strIngredient4": null,
            "strMeasure4": null
        }))
        .unwrap();

        assert_eq!(ingredient_lines(&meal), vec!["1 lb chicken", "2 cups rice"]);
    }

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let meal: Meal = serde_json::from_value(json!({ "idMeal": "1" })).unwrap();
        let summary = MealDbProvider::summary_from(&meal);

        assert_eq!(summary.id, "1");
        assert_eq!(summary.title, "");
        assert_eq!(summary.image_url, None);
        assert!(summary.ingredients.is_empty());
        assert_eq!(summary.description, "");
    }
}
