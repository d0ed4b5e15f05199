pub mod best_match;
pub mod fewest_missing;

pub use best_match::BestMatch;
pub use fewest_missing::FewestMissing;

use crate::domain::models::{RecipeQuery, RecipeSummary};
use crate::error::{Error, Result};

/// A total ordering over search results for a given query. Implementations
/// are pure: same input, same order. `rank` truncates to `limit` after
/// sorting.
pub trait RankStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn rank(
        &self,
        recipes: Vec<RecipeSummary>,
        query: &RecipeQuery,
        limit: usize,
    ) -> Vec<RecipeSummary>;
}

/// Strategies selectable from the CLI by name.
pub fn by_name(name: &str) -> Result<&'static dyn RankStrategy> {
    match name {
        best_match::NAME => Ok(&BestMatch),
        fewest_missing::NAME => Ok(&FewestMissing),
        _ => Err(Error::UnknownStrategy(name.to_string())),
    }
}

pub fn strategy_names() -> &'static [&'static str] {
    &[best_match::NAME, fewest_missing::NAME]
}

/// Per-recipe match statistics shared by the strategies. All comparisons are
/// case-insensitive substring tests.
pub(crate) struct MatchStats {
    pub ingredient_matches: usize,
    pub keyword_hits: usize,
    pub missing: usize,
    pub excluded: bool,
    pub ingredient_count: usize,
}

impl MatchStats {
    /// Ingredients weigh double: matching what the user has beats matching
    /// what they typed.
    pub fn score(&self) -> usize {
        self.ingredient_matches * 2 + self.keyword_hits
    }
}

pub(crate) fn match_stats(
    recipe: &RecipeSummary,
    query: &RecipeQuery,
    keyword_terms: &[String],
) -> MatchStats {
    let ingredients: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|ing| ing.to_lowercase())
        .collect();

    let ingredient_matches = query
        .have
        .iter()
        .filter(|requested| ingredients.iter().any(|ing| ing.contains(requested.as_str())))
        .count();

    let excluded = query
        .exclude
        .iter()
        .any(|forbidden| ingredients.iter().any(|ing| ing.contains(forbidden.as_str())));

    let haystack = format!("{}\n{}", recipe.title, recipe.description).to_lowercase();
    let keyword_hits = keyword_terms
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .count();

    MatchStats {
        ingredient_matches,
        keyword_hits,
        missing: query.have.len().saturating_sub(ingredient_matches),
        excluded,
        ingredient_count: recipe.ingredients.len(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::models::RecipeSummary;

    pub fn summary(title: &str, ingredients: &[&str], description: &str) -> RecipeSummary {
        RecipeSummary {
            id: format!("test:{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            image_url: None,
            source: "test".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        }
    }
}
