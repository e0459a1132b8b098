use crate::{index::HttpSemanticIndex, models::MetaResponse, models::Tone, services::RecommendationService};
use actix_web::{get, web, HttpResponse};

/// Dropdown sources for the external UI: catalog categories plus the fixed
/// tone list, each prefixed with the "ALL" wildcard.
#[get("/meta")]
pub async fn get_meta(
    service: web::Data<RecommendationService<HttpSemanticIndex>>,
) -> HttpResponse {
    let mut categories = vec!["ALL".to_string()];
    categories.extend(service.catalog().categories());

    HttpResponse::Ok().json(MetaResponse {
        categories,
        tones: Tone::LABELS.iter().map(|t| t.to_string()).collect(),
    })
}
