use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use studio_catalog::TimezoneError;
use studio_ledger::AdmissionError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        let msg = err.to_string();
        match err {
            AdmissionError::ClassNotFound(_) => AppError::NotFound(msg),
            AdmissionError::CapacityExceeded { .. }
            | AdmissionError::DuplicateBooking { .. }
            | AdmissionError::LimitReached { .. } => AppError::Conflict(msg),
            AdmissionError::Validation(_) => AppError::BadRequest(msg),
        }
    }
}

impl From<TimezoneError> for AppError {
    fn from(err: TimezoneError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_errors_map_to_statuses() {
        let cases = [
            (AdmissionError::ClassNotFound(9), StatusCode::NOT_FOUND),
            (
                AdmissionError::CapacityExceeded {
                    class_id: 1,
                    capacity: 2,
                },
                StatusCode::CONFLICT,
            ),
            (
                AdmissionError::DuplicateBooking {
                    class_id: 1,
                    email: "a@x.com".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (AdmissionError::LimitReached { max: 2 }, StatusCode::CONFLICT),
            (
                AdmissionError::Validation("blank".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_timezone_error_is_bad_request() {
        let err = TimezoneError::Unrecognized("Mars/Olympus_Mons".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_is_redacted() {
        let err = AppError::Internal(anyhow::anyhow!("connection reset"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
