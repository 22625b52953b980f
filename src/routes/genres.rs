use axum::Router;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use serde::Serialize;

use super::form::FormSubmission;
use super::{EntityId, redirect};
use crate::entities::{game, genre};
use crate::error::AppError;
use crate::services::{DeleteOutcome, GenreDetail, GenreService};
use crate::state::AppState;
use crate::validation::{FieldError, GenreForm, Rejected};

/// Genre pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/genre/create", get(create_form).post(create_genre))
        .route("/genre/{id}", get(genre_detail))
        .route("/genre/{id}/update", get(update_form).post(update_genre))
        .route("/genre/{id}/delete", get(delete_confirm).post(delete_genre))
}

#[derive(Debug, Serialize)]
struct GenreListView {
    title: &'static str,
    genres: Vec<genre::Model>,
}

#[derive(Debug, Serialize)]
struct GenreDetailView {
    title: String,
    genre: genre::Model,
    games: Vec<game::Model>,
}

#[derive(Debug, Serialize)]
struct GenreFormView {
    title: &'static str,
    action: String,
    form: GenreForm,
    errors: Vec<FieldError>,
}

async fn list_genres(State(state): State<AppState>) -> Result<Response, AppError> {
    let genres = GenreService::list(&state.db).await?;
    state.views.render(
        "genre/list.html",
        &GenreListView {
            title: "Genres",
            genres,
        },
    )
}

async fn genre_detail(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let GenreDetail { genre, games } = GenreService::get(&state.db, id).await?;
    state.views.render(
        "genre/detail.html",
        &GenreDetailView {
            title: format!("Genre: {}", genre.name),
            genre,
            games,
        },
    )
}

async fn create_form(State(state): State<AppState>) -> Result<Response, AppError> {
    state.views.render(
        "genre/form.html",
        &GenreFormView {
            title: "Create Genre",
            action: "/genre/create".to_string(),
            form: GenreForm::default(),
            errors: Vec::new(),
        },
    )
}

async fn create_genre(
    State(state): State<AppState>,
    submission: FormSubmission,
) -> Result<Response, AppError> {
    match submission.genre_form().validate() {
        Ok(input) => {
            let outcome = GenreService::create(&state.db, input).await?;
            Ok(redirect(&format!("/genre/{}", outcome.id())))
        }
        Err(Rejected { form, errors }) => state.views.render(
            "genre/form.html",
            &GenreFormView {
                title: "Create Genre",
                action: "/genre/create".to_string(),
                form,
                errors,
            },
        ),
    }
}

async fn update_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let genre = GenreService::find(&state.db, id).await?;
    state.views.render(
        "genre/form.html",
        &GenreFormView {
            title: "Update Genre",
            action: format!("/genre/{id}/update"),
            form: GenreForm { name: genre.name },
            errors: Vec::new(),
        },
    )
}

async fn update_genre(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    submission: FormSubmission,
) -> Result<Response, AppError> {
    match submission.genre_form().validate() {
        Ok(input) => {
            let outcome = GenreService::update(&state.db, id, input).await?;
            Ok(redirect(&format!("/genre/{}", outcome.id())))
        }
        Err(Rejected { form, errors }) => state.views.render(
            "genre/form.html",
            &GenreFormView {
                title: "Update Genre",
                action: format!("/genre/{id}/update"),
                form,
                errors,
            },
        ),
    }
}

async fn delete_confirm(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    match GenreService::find_with_games(&state.db, id).await? {
        Some(GenreDetail { genre, games }) => render_delete(&state, genre, games),
        None => Ok(redirect("/genres")),
    }
}

async fn delete_genre(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    match GenreService::delete(&state.db, id).await? {
        DeleteOutcome::Blocked { entity, games } => render_delete(&state, entity, games),
        DeleteOutcome::Deleted | DeleteOutcome::Missing => Ok(redirect("/genres")),
    }
}

fn render_delete(
    state: &AppState,
    genre: genre::Model,
    games: Vec<game::Model>,
) -> Result<Response, AppError> {
    state.views.render(
        "genre/delete.html",
        &GenreDetailView {
            title: "Delete Genre".to_string(),
            genre,
            games,
        },
    )
}
