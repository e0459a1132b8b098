use actix_web::{web, Scope};

use crate::handlers::{get_meta, health_check, recommendations_config};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(get_meta)
        .configure(recommendations_config)
}
