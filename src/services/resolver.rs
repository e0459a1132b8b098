use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::index::{parse_leading_identifier, SemanticIndex};
use crate::models::Book;
use tracing::debug;
use std::collections::HashSet;
use std::sync::Arc;

/// Turns raw semantic-search snippets into catalog books.
///
/// Keeps the index's relevance order, drops duplicates (a book's description
/// may be chunked into several snippets) and drops identifiers the catalog
/// does not know about. Stale or malformed index entries are not errors.
pub struct CandidateResolver<I> {
    index: I,
    catalog: Arc<CatalogStore>,
}

impl<I: SemanticIndex> CandidateResolver<I> {
    pub fn new(index: I, catalog: Arc<CatalogStore>) -> Self {
        Self { index, catalog }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Resolve up to `initial_top_k` candidates for a query, in descending
    /// semantic relevance. The result is not truncated to any final count;
    /// that happens downstream after category filtering.
    pub async fn resolve(&self, query: &str, initial_top_k: usize) -> Result<Vec<Book>> {
        let snippets = self.index.search(query, initial_top_k).await?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<Book> = Vec::new();

        for snippet in &snippets {
            let isbn = match parse_leading_identifier(&snippet.text) {
                Some(isbn) => isbn,
                None => continue,
            };
            if !seen.insert(isbn.to_string()) {
                continue;
            }
            if let Some(book) = self.catalog.get(isbn) {
                candidates.push(book.clone());
            }
        }

        debug!(
            "Resolved {} candidates from {} snippets for query '{}'",
            candidates.len(),
            snippets.len(),
            query
        );

        Ok(candidates)
    }
}
