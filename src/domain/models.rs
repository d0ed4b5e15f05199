use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One search hit, normalized across providers. Ingredient entries are
/// lowercased and trimmed by the adapter that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub image_url: Option<String>,
    pub source: String,
    pub ingredients: Vec<String>,
    /// Short preparation text shipped with the search response (MealDB
    /// instructions, Spoonacular HTML-stripped summary). Used for keyword
    /// ranking only; full instructions come from a `details` lookup.
    pub description: String,
}

/// Full record for a single recipe, returned only by `details` lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub id: String,
    pub title: String,
    pub instructions: String,
    pub ingredients: Vec<String>,
    pub image_url: Option<String>,
    pub source: String,
}

/// A normalized search request. Construct through [`RecipeQuery::new`] or the
/// [`crate::domain::RecipeQueryBuilder`]; both enforce that the query carries
/// some search intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeQuery {
    pub have: Vec<String>,
    pub exclude: Vec<String>,
    pub keyword: Option<String>,
}

impl RecipeQuery {
    /// Ingredient names are expected pre-normalized (lowercase, trimmed);
    /// the builder takes care of that for raw user input.
    pub fn new(have: Vec<String>, exclude: Vec<String>, keyword: Option<String>) -> Result<Self> {
        if have.is_empty() && keyword.is_none() {
            return Err(Error::Validation(
                "Provide at least one ingredient or a keyword".to_string(),
            ));
        }
        Ok(RecipeQuery {
            have,
            exclude,
            keyword,
        })
    }

    /// Deterministic key for the cache layer. Two queries with the same
    /// normalized contents produce the same key.
    pub fn cache_key(&self) -> String {
        format!("search:{self}")
    }

    /// Keyword terms for ranking: whitespace-split, lowercased.
    pub fn keyword_terms(&self) -> Vec<String> {
        self.keyword
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}

impl fmt::Display for RecipeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "have={}|exclude={}|keyword={}",
            self.have.join(","),
            self.exclude.join(","),
            self.keyword.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_requires_some_intent() {
        assert!(RecipeQuery::new(vec![], vec![], None).is_err());
        assert!(RecipeQuery::new(vec!["rice".to_string()], vec![], None).is_ok());
        assert!(RecipeQuery::new(vec![], vec![], Some("pasta".to_string())).is_ok());
    }

    #[test]
    fn test_cache_key_is_deterministic() {
        let a = RecipeQuery::new(
            vec!["chicken".to_string(), "rice".to_string()],
            vec!["nuts".to_string()],
            Some("spicy".to_string()),
        )
        .unwrap();
        let b = a.clone();

        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), "search:have=chicken,rice|exclude=nuts|keyword=spicy");
    }

    #[test]
    fn test_keyword_terms_split_and_lowercase() {
        let query = RecipeQuery::new(vec![], vec![], Some("Spicy  Tacos".to_string())).unwrap();
        assert_eq!(query.keyword_terms(), vec!["spicy", "tacos"]);

        let query = RecipeQuery::new(vec!["rice".to_string()], vec![], None).unwrap();
        assert!(query.keyword_terms().is_empty());
    }
}
