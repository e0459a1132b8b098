use serde::{Deserialize, Serialize};

// Re-export types from book.rs
pub use book::{Book, Tone};

mod book;

fn default_filter() -> String {
    "ALL".to_string()
}

/// Request structure for book recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Free-text description of the kind of book the user wants
    pub query: String,
    /// Category restriction, or "ALL" for no restriction
    #[serde(default = "default_filter")]
    pub category: String,
    /// Emotional tone to rank by, or "ALL" for semantic-relevance order
    #[serde(default = "default_filter")]
    pub tone: String,
}

/// One display-ready recommendation: a cover image and a caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCard {
    pub image: String,
    pub caption: String,
}

/// Response structure for book recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Ordered recommendations; empty when nothing matched, never null
    pub recommendations: Vec<BookCard>,
}

/// Dropdown sources for the external UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaResponse {
    pub categories: Vec<String>,
    pub tones: Vec<String>,
}
