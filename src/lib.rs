pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod index;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{ApiError, Result};
