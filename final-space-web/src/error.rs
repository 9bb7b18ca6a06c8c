//! HTTP error mapping

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use final_space_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Body returned whenever the catalog cannot be served.
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar los personajes de Final Space";

/// Body returned when `selected` names no character.
pub const NOT_FOUND_MESSAGE: &str = "Personaje no encontrado";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Errors surfaced by the API handlers.
///
/// Details stay in the server log; the client only sees a fixed message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Catalog unavailable")]
    CatalogUnavailable,

    #[error("Character not found: {0}")]
    CharacterNotFound(usize),

    #[error("{0}")]
    Internal(CoreError),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Catalog(_) => Self::CatalogUnavailable,
            CoreError::CharacterNotFound(index) => Self::CharacterNotFound(index),
            other @ CoreError::InvalidTransition { .. } => Self::Internal(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CharacterNotFound(_) => StatusCode::NOT_FOUND,
            Self::CatalogUnavailable | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            Self::CharacterNotFound(_) => NOT_FOUND_MESSAGE,
            Self::CatalogUnavailable | Self::Internal(_) => LOAD_ERROR_MESSAGE,
        };
        if let Self::Internal(e) = self {
            tracing::error!("Unexpected gallery error: {e}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody { error })
    }
}
