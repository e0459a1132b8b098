use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::index::SemanticIndex;
use crate::models::{BookCard, Tone};
use crate::services::presentation::format_card;
use crate::services::ranking::select_and_rank;
use crate::services::resolver::CandidateResolver;
use tracing::info;
use std::sync::Arc;

/// How many candidates to over-fetch from the semantic index. Wider than the
/// final bound so that a category filter still has a pool to pick from.
const INITIAL_TOP_K: usize = 50;

/// Maximum number of recommendations returned to the caller.
const FINAL_TOP_K: usize = 16;

/// Full recommendation pipeline: semantic retrieval, candidate resolution,
/// category filter, tone re-rank, gallery formatting.
pub struct RecommendationService<I> {
    resolver: CandidateResolver<I>,
}

impl<I: SemanticIndex> RecommendationService<I> {
    pub fn new(index: I, catalog: Arc<CatalogStore>) -> Self {
        Self {
            resolver: CandidateResolver::new(index, catalog),
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        self.resolver.catalog()
    }

    /// Produce up to [`FINAL_TOP_K`] display-ready recommendations.
    ///
    /// A blank query degrades to an empty result rather than hitting the
    /// index. The only failure surfaced from here is an unreachable index.
    pub async fn get_recommendations(
        &self,
        query: &str,
        category: &str,
        tone: &str,
    ) -> Result<Vec<BookCard>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.resolver.resolve(query, INITIAL_TOP_K).await?;
        let ranked = select_and_rank(candidates, category, Tone::parse(tone), FINAL_TOP_K);

        info!(
            "Query '{}' (category={}, tone={}) -> {} recommendations",
            query,
            category,
            tone,
            ranked.len()
        );

        Ok(ranked.iter().map(format_card).collect())
    }
}
