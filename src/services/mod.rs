pub mod presentation;
pub mod ranking;
pub mod recommendation;
pub mod resolver;

// Re-export public types
pub use presentation::format_card;
pub use ranking::select_and_rank;
pub use recommendation::RecommendationService;
pub use resolver::CandidateResolver;
