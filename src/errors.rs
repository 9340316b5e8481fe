use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// HTTP-facing error taxonomy. Store details never reach the client;
/// they are logged at the conversion boundary and replaced with a
/// generic notice.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("order no longer exists")]
    NotFound,

    #[error("something went wrong, please retry")]
    Store,
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { field, message } => ApiError::Validation { field, message },
            DomainError::NotFound => ApiError::NotFound,
            DomainError::Store(detail) => {
                log::error!("store failure: {detail}");
                ApiError::Store
            }
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation { field, .. } => HttpResponse::BadRequest().json(
                serde_json::json!({ "error": self.to_string(), "field": field }),
            ),
            ApiError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            ApiError::Store => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn validation_returns_400() {
        let err = ApiError::Validation {
            field: "name",
            message: "name is required".to_string(),
        };
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_returns_404() {
        assert_eq!(
            ApiError::NotFound.error_response().status(),
            actix_web::http::StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn store_returns_500() {
        assert_eq!(
            ApiError::Store.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_display_carries_field_message() {
        let err = ApiError::Validation {
            field: "village",
            message: "village is required".to_string(),
        };
        assert_eq!(err.to_string(), "village is required");
    }

    #[test]
    fn domain_not_found_maps_to_api_not_found() {
        let api: ApiError = DomainError::NotFound.into();
        assert!(matches!(api, ApiError::NotFound));
    }

    #[test]
    fn domain_store_maps_to_generic_store_error() {
        let api: ApiError = DomainError::Store("connection refused".to_string()).into();
        assert!(matches!(api, ApiError::Store));
        assert!(!api.to_string().contains("connection refused"));
    }

    #[test]
    fn domain_validation_maps_to_api_validation() {
        let api: ApiError = DomainError::validation("phone", "phone is required").into();
        match api {
            ApiError::Validation { field, message } => {
                assert_eq!(field, "phone");
                assert_eq!(message, "phone is required");
            }
            other => panic!("expected validation, got {other:?}"),
        }
    }
}
