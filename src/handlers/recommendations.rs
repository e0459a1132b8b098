use crate::{
    error::ApiError,
    index::HttpSemanticIndex,
    models::{RecommendationRequest, RecommendationResponse},
    services::RecommendationService,
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/recommendations").route(web::post().to(get_recommendations)));
}

/// Get tone-ranked book recommendations for a free-text description.
pub async fn get_recommendations(
    request: Json<RecommendationRequest>,
    service: web::Data<RecommendationService<HttpSemanticIndex>>,
) -> Result<HttpResponse, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::InvalidInput("Query cannot be empty".to_string()));
    }

    let recommendations = service
        .get_recommendations(&request.query, &request.category, &request.tone)
        .await?;

    Ok(HttpResponse::Ok().json(RecommendationResponse { recommendations }))
}
