use crate::error::{ApiError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// One hit from the semantic index: a text blob whose first
/// whitespace-delimited token is the isbn of the book it was chunked from.
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub text: String,
}

/// Extract the isbn a snippet references.
///
/// The index stores tagged descriptions (`"<isbn> <description text>"`), so
/// the identifier is positional. This function is the single place that
/// contract lives; if the index's snippet format changes, change it here.
pub fn parse_leading_identifier(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Nearest-neighbor text search over book descriptions.
///
/// The embedding model and vector store behind this are external; this layer
/// only depends on getting back relevance-ordered snippets.
#[allow(async_fn_in_trait)]
pub trait SemanticIndex {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Snippet>>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    k: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Snippet>,
}

/// HTTP client for the semantic search service.
#[derive(Debug, Clone)]
pub struct HttpSemanticIndex {
    client: Client,
    base_url: String,
}

impl HttpSemanticIndex {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl SemanticIndex for HttpSemanticIndex {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Snippet>> {
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&SearchRequest { query, k })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiError::IndexUnavailable(format!(
                "search returned {}: {}",
                status, error_text
            )));
        }

        let search_response: SearchResponse = response.json().await?;
        Ok(search_response.results)
    }
}
