use crate::domain::models::{RecipeQuery, RecipeSummary};
use crate::ranking::{match_stats, RankStrategy};

pub const NAME: &str = "fewest-missing";

/// Orders by ascending count of requested ingredients the recipe lacks.
/// Recipes containing an excluded ingredient rank after everything else.
/// Ties break toward shorter ingredient lists, more keyword hits, more
/// ingredient matches, then title order.
pub struct FewestMissing;

impl RankStrategy for FewestMissing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn rank(
        &self,
        recipes: Vec<RecipeSummary>,
        query: &RecipeQuery,
        limit: usize,
    ) -> Vec<RecipeSummary> {
        let terms = query.keyword_terms();
        if query.have.is_empty() && terms.is_empty() {
            let mut passthrough = recipes;
            passthrough.truncate(limit);
            return passthrough;
        }

        let mut scored: Vec<_> = recipes
            .into_iter()
            .map(|recipe| (match_stats(&recipe, query, &terms), recipe))
            .collect();

        scored.sort_by(|(a, recipe_a), (b, recipe_b)| {
            a.excluded
                .cmp(&b.excluded)
                .then(a.missing.cmp(&b.missing))
                .then(a.ingredient_count.cmp(&b.ingredient_count))
                .then(b.keyword_hits.cmp(&a.keyword_hits))
                .then(b.ingredient_matches.cmp(&a.ingredient_matches))
                .then_with(|| recipe_a.title.to_lowercase().cmp(&recipe_b.title.to_lowercase()))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, recipe)| recipe)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeQueryBuilder;
    use crate::ranking::test_support::summary;

    #[test]
    fn test_prefers_fewer_missing_then_shorter_lists() {
        let recipes = vec![
            summary("Long", &["chicken", "rice", "salt"], ""),
            summary("MissingOne", &["chicken"], ""),
            summary("Short", &["chicken", "rice"], ""),
        ];
        let query = RecipeQueryBuilder::new().have("chicken,rice").build().unwrap();

        let ranked = FewestMissing.rank(recipes, &query, 10);
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Short", "Long", "MissingOne"]);
    }

    #[test]
    fn test_excluded_ingredient_forces_worst_rank() {
        let recipes = vec![
            summary("Peanut Chicken", &["chicken", "rice", "peanuts"], ""),
            summary("Plain Chicken", &["chicken"], ""),
        ];
        let query = RecipeQueryBuilder::new()
            .have("chicken,rice")
            .exclude("peanuts")
            .build()
            .unwrap();

        let ranked = FewestMissing.rank(recipes, &query, 10);
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        // Perfect ingredient coverage loses to a partial match once an
        // exclusion fires.
        assert_eq!(titles, vec!["Plain Chicken", "Peanut Chicken"]);
    }

    #[test]
    fn test_keyword_hits_break_equal_missing_and_length() {
        let recipes = vec![
            summary("Mild Curry", &["chicken"], "gentle"),
            summary("Hot Curry", &["chicken"], "very spicy"),
        ];
        let query = RecipeQueryBuilder::new()
            .have("chicken")
            .keyword("spicy")
            .build()
            .unwrap();

        let ranked = FewestMissing.rank(recipes, &query, 10);
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Hot Curry", "Mild Curry"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let recipes = vec![
            summary("Short", &["chicken", "rice"], ""),
            summary("Long", &["chicken", "rice", "salt"], ""),
            summary("MissingOne", &["chicken"], ""),
        ];
        let query = RecipeQueryBuilder::new().have("chicken,rice").build().unwrap();

        let once = FewestMissing.rank(recipes, &query, 10);
        let twice = FewestMissing.rank(once.clone(), &query, 10);
        assert_eq!(once, twice);
    }
}
