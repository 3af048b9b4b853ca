use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Maps service failures onto the API boundary: duplicate registration is a
/// conflict, a missed lookup is not-found, everything else is internal.
#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::Validation(errors) => {
                let error_msg = format!("Validation failed: {errors:?}");
                (StatusCode::BAD_REQUEST, error_msg)
            }

            err @ ServiceError::AlreadyExists(_) => (StatusCode::CONFLICT, err.to_string()),

            err @ ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::AlreadyExists(msg) => (StatusCode::CONFLICT, msg),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            ServiceError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_maps_to_conflict() {
        let response =
            AppErrorHttp(ServiceError::AlreadyExists("9876543210".into())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let response =
            AppErrorHttp(ServiceError::not_found("Card", "mobileNumber", "0000000000"))
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
