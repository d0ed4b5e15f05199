use crate::domain::models::RecipeQuery;
use crate::error::Result;

/// Hard ceiling on how many results a caller may request.
pub const MAX_RESULTS: usize = 25;

/// Default when the caller does not ask for a specific count.
pub const DEFAULT_RESULTS: usize = 10;

/// Normalizes raw user input into a [`RecipeQuery`] plus a clamped result
/// limit. Ingredient lists arrive as comma-separated text; tokens are
/// trimmed, lowercased, and empty entries dropped.
#[derive(Debug, Clone)]
pub struct RecipeQueryBuilder {
    have: Vec<String>,
    exclude: Vec<String>,
    keyword: Option<String>,
    limit: usize,
}

impl Default for RecipeQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeQueryBuilder {
    pub fn new() -> Self {
        RecipeQueryBuilder {
            have: Vec::new(),
            exclude: Vec::new(),
            keyword: None,
            limit: DEFAULT_RESULTS,
        }
    }

    pub fn have(mut self, ingredients_csv: &str) -> Self {
        self.have = split_csv(ingredients_csv);
        self
    }

    pub fn exclude(mut self, ingredients_csv: &str) -> Self {
        self.exclude = split_csv(ingredients_csv);
        self
    }

    pub fn keyword(mut self, keyword: &str) -> Self {
        let trimmed = keyword.trim();
        self.keyword = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_RESULTS);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fails with a validation error when neither ingredients nor a keyword
    /// survived normalization; the query must express some search intent.
    pub fn build(self) -> Result<RecipeQuery> {
        RecipeQuery::new(self.have, self.exclude, self.keyword)
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
