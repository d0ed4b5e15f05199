use crate::domain::models::{RecipeQuery, RecipeSummary};
use crate::ranking::{match_stats, RankStrategy};

pub const NAME: &str = "best-match";

/// Orders by combined score (ingredient matches weighted double, plus
/// keyword hits), with ties broken toward more ingredient matches, more
/// keyword hits, fewer missing ingredients, shorter ingredient lists, and
/// finally title order.
pub struct BestMatch;

impl RankStrategy for BestMatch {
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
            b.score()
                .cmp(&a.score())
                .then(b.ingredient_matches.cmp(&a.ingredient_matches))
                .then(b.keyword_hits.cmp(&a.keyword_hits))
                .then(a.missing.cmp(&b.missing))
                .then(a.ingredient_count.cmp(&b.ingredient_count))
                .then_with(|| recipe_a.title.to_lowercase().cmp(&recipe_b.title.to_lowercase()))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, recipe)| recipe)
            .collect()
    }
}
