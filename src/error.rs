use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Unified application error type.
///
/// Validation failures, name collisions and blocked deletes are ordinary results
/// handled by the handlers; only the variants below reach the error page.
#[derive(Debug)]
pub enum AppError {
    /// 400 Bad Request (malformed form body)
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error (database, template or filesystem failure)
    Internal(anyhow::Error),
}

/// Error details attached to error responses, rendered into the error view
/// by [`crate::routes::render_error_page`].
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    Some(format!("{err:?}")),
                )
            }
        };

        let mut response = (status, message.clone()).into_response();
        response
            .extensions_mut()
            .insert(ErrorReport { message, detail });
        response
    }
}

/// Allow `?` to automatically convert any `anyhow::Error`-compatible error
/// (notably `sea_orm::DbErr`) into `AppError::Internal`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_and_report() {
        let response = AppError::NotFound("Game not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let report = response.extensions().get::<ErrorReport>().cloned();
        assert!(matches!(
            report,
            Some(ErrorReport { ref message, detail: None }) if message == "Game not found"
        ));
    }

    #[test]
    fn test_db_error_becomes_internal() {
        let err: AppError = sea_orm::DbErr::Custom("boom".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = response
            .extensions()
            .get::<ErrorReport>()
            .and_then(|r| r.detail.clone())
            .unwrap_or_default();
        assert!(detail.contains("boom"));
    }
}
