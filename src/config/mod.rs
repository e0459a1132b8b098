use crate::error::{ApiError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: String,
    pub semantic_index_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            catalog_path: env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "books_with_emotions.csv".to_string()),
            semantic_index_url: env::var("SEMANTIC_INDEX_URL").map_err(|_| {
                ApiError::InternalError("SEMANTIC_INDEX_URL must be set".to_string())
            })?,
        })
    }
}
