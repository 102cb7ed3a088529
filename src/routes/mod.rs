use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::dto::ErrorDto;
use crate::services::ServiceError;

pub mod donate;
pub mod main;

/// Errors rendered as `{"detail": ...}` JSON.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    Internal(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDto {
            detail: self.to_string(),
        })
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(message) => ApiError::Validation(message),
            ServiceError::InvalidPath | ServiceError::NotFound => ApiError::NotFound,
            ServiceError::IndexMissing => ApiError::Internal("index.html not found"),
            ServiceError::ReadFile(_) => ApiError::Internal("failed to read file"),
        }
    }
}

/// Malformed or mistyped JSON bodies are validation failures too.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected JSON body: {err}");
        ApiError::Validation(err.to_string()).into()
    })
}

/// Register every explicit route. The SPA fallback is installed separately
/// as the application's default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(main::index)
        .service(main::favicon)
        .service(donate::donate);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("bad".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::InvalidPath, StatusCode::NOT_FOUND),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::IndexMissing, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn traversal_is_reported_as_plain_not_found() {
        let err = ApiError::from(ServiceError::InvalidPath);
        assert_eq!(err.to_string(), "Not Found");
    }
}
