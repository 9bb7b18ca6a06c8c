//! HTTP routes

use actix_web::{HttpResponse, web};
use final_space_core::{CharacterService, GalleryState, GalleryView};
use serde::Deserialize;
use tracing_attributes::instrument;

use crate::error::ApiError;

/// Register every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/characters", web::get().to(list_characters))
            .route("/gallery", web::get().to(gallery))
            .route("/health", web::get().to(health)),
    );
}

/// `GET /api/characters`: the whole catalog, translated.
#[instrument(skip_all)]
async fn list_characters(
    service: web::Data<CharacterService>,
) -> Result<HttpResponse, ApiError> {
    let characters = service.list_characters().await?;
    tracing::debug!(count = characters.len(), "Serving characters");
    Ok(HttpResponse::Ok().json(characters))
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    /// Name search
    #[serde(default)]
    pub q: String,
    /// 1-based page, clamped to the available pages; ignored when nothing matches
    pub page: Option<usize>,
    /// Catalog position of the character to show in detail
    pub selected: Option<usize>,
}

/// `GET /api/gallery`: one full gallery pass rendered to a view model.
#[instrument(skip(service))]
async fn gallery(
    service: web::Data<CharacterService>,
    query: web::Query<GalleryQuery>,
) -> Result<HttpResponse, ApiError> {
    let GalleryQuery { q, page, selected } = query.into_inner();

    let GalleryState::Ready(mut gallery) = service.load_gallery().await? else {
        return Err(ApiError::CatalogUnavailable);
    };

    gallery.set_search_query(q);
    let last = gallery.total_pages();
    if let Some(page) = page
        && last > 0
    {
        let moved = gallery.go_to_page(page.clamp(1, last));
        tracing::debug!(page, last, moved, "Gallery page requested");
    }
    if let Some(index) = selected {
        gallery.open_detail(index)?;
    }

    Ok(HttpResponse::Ok().json(GalleryView::from_gallery(&gallery)))
}

/// `GET /api/health`
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
#[path = "test_mocks.rs"]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
