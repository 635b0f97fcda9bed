// src/errors.rs
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetGenError {
    #[error(
        "OPENAI_API_KEY is not configured. Add it in Railway Variables (or .env.local) and redeploy."
    )]
    MissingApiKey,

    #[error("{0}")]
    Validation(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    // User-facing wrapper around any upstream model failure; the product's
    // primary language is Swedish.
    #[error("Kunde inte generera material: {0}")]
    Model(String),
}

impl ResponseError for AssetGenError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AssetGenError::MissingApiKey | AssetGenError::Model(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
            AssetGenError::Validation(_) | AssetGenError::ImageProcessing(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn validation_maps_to_400() {
        let err = AssetGenError::Validation("missing field".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn model_failure_maps_to_500_with_wrapped_message() {
        let err = AssetGenError::Model("upstream exploded".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            err.to_string(),
            "Kunde inte generera material: upstream exploded"
        );
    }

    #[test]
    fn missing_key_maps_to_500() {
        let err = AssetGenError::MissingApiKey;
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
