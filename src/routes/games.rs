use axum::Router;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use serde::Serialize;

use super::form::FormSubmission;
use super::{EntityId, redirect};
use crate::entities::{company, game, genre};
use crate::error::AppError;
use crate::services::{GameDetail, GameEdit, GameFormOptions, GameService};
use crate::state::AppState;
use crate::validation::{FieldError, GameForm, Rejected};

/// Game pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/game/create", get(create_form).post(create_game))
        .route("/game/{id}", get(game_detail))
        .route("/game/{id}/update", get(update_form).post(update_game))
        .route("/game/{id}/delete", get(delete_confirm).post(delete_game))
}

// ============================================================================
// View models
// ============================================================================

#[derive(Debug, Serialize)]
struct GameListView {
    title: &'static str,
    games: Vec<game::Model>,
}

#[derive(Debug, Serialize)]
struct GameDetailView {
    title: String,
    game: game::Model,
    company: Option<company::Model>,
    genres: Vec<genre::Model>,
    platforms: Vec<&'static str>,
}

impl GameDetailView {
    fn new(title: String, detail: GameDetail) -> Self {
        Self {
            title,
            platforms: detail.platforms.iter().map(|p| p.name()).collect(),
            game: detail.game,
            company: detail.company,
            genres: detail.genres,
        }
    }
}

#[derive(Debug, Serialize)]
struct GameFormView {
    title: &'static str,
    action: String,
    form: GameForm,
    options: GameFormOptions,
    image: Option<String>,
    errors: Vec<FieldError>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_games(State(state): State<AppState>) -> Result<Response, AppError> {
    let games = GameService::list(&state.db).await?;
    state.views.render(
        "game/list.html",
        &GameListView {
            title: "Games",
            games,
        },
    )
}

async fn game_detail(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let detail = GameService::get(&state.db, id).await?;
    let title = format!("Game: {}", detail.game.name);
    state
        .views
        .render("game/detail.html", &GameDetailView::new(title, detail))
}

async fn create_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let options = GameService::form_options(&state.db, None, &[], &[]).await?;
    state.views.render(
        "game/form.html",
        &GameFormView {
            title: "Create Game",
            action: "/game/create".to_string(),
            form: GameForm::default(),
            options,
            image: None,
            errors: Vec::new(),
        },
    )
}

async fn create_game(
    State(state): State<AppState>,
    submission: FormSubmission,
) -> Result<Response, AppError> {
    let checked = match submission.game_form().validate() {
        Ok(input) => GameService::check_references(&state.db, input).await?,
        Err(rejected) => Err(rejected),
    };
    let input = match checked {
        Ok(input) => input,
        Err(Rejected { form, errors }) => {
            let options = GameService::form_options_for(&state.db, &form).await?;
            return state.views.render(
                "game/form.html",
                &GameFormView {
                    title: "Create Game",
                    action: "/game/create".to_string(),
                    form,
                    options,
                    image: None,
                    errors,
                },
            );
        }
    };

    let outcome =
        GameService::create(&state.db, &state.config.upload_dir, input, submission.image).await?;
    Ok(redirect(&format!("/game/{}", outcome.id())))
}

async fn update_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let GameEdit {
        game,
        form,
        options,
    } = GameService::edit(&state.db, id).await?;
    state.views.render(
        "game/form.html",
        &GameFormView {
            title: "Update Game",
            action: format!("/game/{id}/update"),
            form,
            options,
            image: game.image,
            errors: Vec::new(),
        },
    )
}

async fn update_game(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    submission: FormSubmission,
) -> Result<Response, AppError> {
    let checked = match submission.game_form().validate() {
        Ok(input) => GameService::check_references(&state.db, input).await?,
        Err(rejected) => Err(rejected),
    };
    let input = match checked {
        Ok(input) => input,
        Err(Rejected { form, errors }) => {
            let detail = GameService::get(&state.db, id).await?;
            let options = GameService::form_options_for(&state.db, &form).await?;
            return state.views.render(
                "game/form.html",
                &GameFormView {
                    title: "Update Game",
                    action: format!("/game/{id}/update"),
                    form,
                    options,
                    image: detail.game.image,
                    errors,
                },
            );
        }
    };

    let outcome = GameService::update(
        &state.db,
        &state.config.upload_dir,
        id,
        input,
        submission.image,
    )
    .await?;
    Ok(redirect(&format!("/game/{}", outcome.id())))
}

async fn delete_confirm(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let Some(detail) = GameService::find_with_relations(&state.db, id).await? else {
        return Ok(redirect("/games"));
    };
    state.views.render(
        "game/delete.html",
        &GameDetailView::new("Delete Game".to_string(), detail),
    )
}

async fn delete_game(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    GameService::delete(&state.db, id).await?;
    Ok(redirect("/games"))
}
