pub mod health;
pub mod meta;
pub mod recommendations;

pub use health::health_check;
pub use meta::get_meta;
pub use recommendations::recommendations_config;
