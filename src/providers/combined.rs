use crate::domain::models::{RecipeDetails, RecipeQuery, RecipeSummary};
use crate::error::{Error, Result};
use crate::providers::RecipeProvider;
use async_trait::async_trait;
use futures::future;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fans one query out to every registered adapter and merges the results
/// into a single global identity space. This is the only place composite
/// `<source>:<local-id>` ids are minted.
pub struct CombinedProvider {
    providers: Vec<Arc<dyn RecipeProvider>>,
}

impl CombinedProvider {
    pub fn new(providers: Vec<Arc<dyn RecipeProvider>>) -> Self {
        CombinedProvider { providers }
    }

    /// De-duplicate by (lowercased title, source tag), first occurrence wins,
    /// insertion order otherwise preserved.
    fn dedup(merged: Vec<RecipeSummary>) -> Vec<RecipeSummary> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        merged
            .into_iter()
            .filter(|summary| seen.insert((summary.title.to_lowercase(), summary.source.clone())))
            .collect()
    }
}

#[async_trait]
impl RecipeProvider for CombinedProvider {
    fn source_tag(&self) -> &'static str {
        "combined"
    }

    /// Adapters run concurrently; a failing adapter contributes zero results
    /// rather than aborting the whole search.
    async fn search(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>> {
        let branches = self.providers.iter().map(|provider| async move {
            match provider.search(query).await {
                Ok(summaries) => {
                    debug!(
                        source = provider.source_tag(),
                        count = summaries.len(),
                        "Provider search succeeded"
                    );
                    (provider.source_tag(), summaries)
                }
                Err(e) => {
                    warn!(
                        source = provider.source_tag(),
                        error = %e,
                        "Provider search failed; contributing zero results"
                    );
                    (provider.source_tag(), Vec::new())
                }
            }
        });

        let mut merged = Vec::new();
        for (tag, summaries) in future::join_all(branches).await {
            for summary in summaries {
                merged.push(RecipeSummary {
                    id: format!("{tag}:{}", summary.id),
                    source: tag.to_string(),
                    ..summary
                });
            }
        }

        Ok(Self::dedup(merged))
    }

    async fn details(&self, recipe_id: &str) -> Result<RecipeDetails> {
        let (source, local_id) = recipe_id
            .split_once(':')
            .ok_or_else(|| Error::InvalidId(recipe_id.to_string()))?;

        let provider = self
            .providers
            .iter()
            .find(|provider| provider.source_tag() == source)
            .ok_or_else(|| Error::UnknownProvider(source.to_string()))?;

        let details = provider.details(local_id).await?;
        Ok(RecipeDetails {
            id: recipe_id.to_string(),
            source: source.to_string(),
            ..details
        })
    }
}
