mod companies;
mod form;
mod games;
mod genres;

use axum::Router;
use axum::extract::{DefaultBodyLimit, FromRequestParts, Path, Request, State};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::error::{AppError, ErrorReport};
use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /` redirects to the game list
/// - `/companies`, `/company/...` company pages
/// - `/games`, `/game/...` game pages
/// - `/genres`, `/genre/...` genre pages
/// - `/images/{file}` uploaded images
///
/// Request bodies may be up to `UPLOAD_MAX_BYTES`. Every error response is
/// rendered through the error page.
pub fn app(state: AppState) -> Router {
    let images = ServeDir::new(&state.config.upload_dir);
    let body_limit = DefaultBodyLimit::max(state.config.upload_max_bytes);

    Router::new()
        .route("/", get(index))
        .merge(companies::router())
        .merge(games::router())
        .merge(genres::router())
        .nest_service("/images", images)
        .fallback(not_found)
        .layer(body_limit)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            render_error_page,
        ))
        .with_state(state)
}

/// `302 Found` to `location`.
pub(crate) fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

async fn index() -> Response {
    redirect("/games")
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

/// Numeric `{id}` path segment. Anything that is not an integer is a missing page.
pub(crate) struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Page not found".to_string()))?;
        raw.parse()
            .map(Self)
            .map_err(|_| AppError::NotFound("Page not found".to_string()))
    }
}

#[derive(Serialize)]
struct ErrorView<'a> {
    title: &'a str,
    status: u16,
    message: &'a str,
    detail: Option<&'a str>,
}

/// Replace any response carrying an [`ErrorReport`] with the rendered error page.
///
/// The error chain is only shown outside production.
pub async fn render_error_page(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    let status = response.status();
    let view = ErrorView {
        title: status.canonical_reason().unwrap_or("Error"),
        status: status.as_u16(),
        message: &report.message,
        detail: report
            .detail
            .as_deref()
            .filter(|_| state.config.shows_error_detail()),
    };

    match state.views.render_string("error.html", &view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render error page: {err}");
            (status, report.message).into_response()
        }
    }
}
