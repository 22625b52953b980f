use std::path::Path;

use sea_orm::{DatabaseConnection, Set};
use serde::Serialize;

use crate::entities::{Platform, company, game, genre};
use crate::error::AppError;
use crate::repository::{CompanyRepository, GameRepository, GenreRepository};
use crate::upload::{self, ImageUpload};
use crate::validation::{FieldError, GameForm, GameInput, Rejected};

use super::SaveOutcome;

/// A game with its publisher, genres and the platforms it is available on.
#[derive(Debug, Clone)]
pub struct GameDetail {
    pub game: game::Model,
    pub company: Option<company::Model>,
    pub genres: Vec<genre::Model>,
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyOption {
    pub id: i32,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreOption {
    pub id: i32,
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformOption {
    pub id: i32,
    pub name: &'static str,
    pub checked: bool,
}

/// Pick lists for the game form, flagged with the current selection.
#[derive(Debug, Clone, Serialize)]
pub struct GameFormOptions {
    pub companies: Vec<CompanyOption>,
    pub genres: Vec<GenreOption>,
    pub platforms: Vec<PlatformOption>,
}

/// Everything the update form needs: the stored game, its values as form
/// fields and the pick lists seeded from them.
#[derive(Debug, Clone)]
pub struct GameEdit {
    pub game: game::Model,
    pub form: GameForm,
    pub options: GameFormOptions,
}

pub struct GameService;

impl GameService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<game::Model>, AppError> {
        Ok(GameRepository::find_all(db).await?)
    }

    /// Game with its relations, or `None` if the game does not exist.
    pub async fn find_with_relations(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<GameDetail>, AppError> {
        let (game, company, genres) = tokio::try_join!(
            GameRepository::find_by_id(db, id),
            GameRepository::find_company(db, id),
            GameRepository::find_genres(db, id),
        )?;

        Ok(game.map(|game| GameDetail {
            platforms: game.platforms(),
            game,
            company,
            genres,
        }))
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<GameDetail, AppError> {
        Self::find_with_relations(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    /// Companies (by name), genres and platforms, flagged with the given selection.
    pub async fn form_options(
        db: &DatabaseConnection,
        company_id: Option<i32>,
        genre_ids: &[i32],
        platforms: &[Platform],
    ) -> Result<GameFormOptions, AppError> {
        let (companies, genres) = tokio::try_join!(
            CompanyRepository::find_all_by_name(db),
            GenreRepository::find_all(db),
        )?;

        Ok(GameFormOptions {
            companies: companies
                .into_iter()
                .map(|c| CompanyOption {
                    selected: company_id == Some(c.id),
                    id: c.id,
                    name: c.name,
                })
                .collect(),
            genres: genres
                .into_iter()
                .map(|g| GenreOption {
                    checked: genre_ids.contains(&g.id),
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            platforms: Platform::ALL
                .into_iter()
                .map(|p| PlatformOption {
                    id: p.id(),
                    name: p.name(),
                    checked: platforms.contains(&p),
                })
                .collect(),
        })
    }

    /// Form options for a submitted (possibly rejected) form.
    pub async fn form_options_for(
        db: &DatabaseConnection,
        form: &GameForm,
    ) -> Result<GameFormOptions, AppError> {
        Self::form_options(
            db,
            form.company.parse().ok(),
            &form.genre_ids(),
            &form.platforms(),
        )
        .await
    }

    /// The stored game as an update form.
    pub async fn edit(db: &DatabaseConnection, id: i32) -> Result<GameEdit, AppError> {
        let GameDetail {
            game,
            company,
            genres,
            platforms,
        } = Self::get(db, id).await?;

        let company_id = company.map(|c| c.id);
        let genre_ids: Vec<i32> = genres.iter().map(|g| g.id).collect();
        let options = Self::form_options(db, company_id, &genre_ids, &platforms).await?;

        let form = GameForm {
            name: game.name.clone(),
            price: game.price.to_string(),
            copies: game.copies.to_string(),
            company: company_id.map(|id| id.to_string()).unwrap_or_default(),
            genres: genre_ids.iter().map(ToString::to_string).collect(),
            platforms: platforms.iter().map(|p| p.id().to_string()).collect(),
        };

        Ok(GameEdit {
            game,
            form,
            options,
        })
    }

    /// Confirm the publisher exists and drop genre ids that do not.
    ///
    /// A missing publisher rejects the input with the "Company required" error,
    /// before anything is written.
    pub async fn check_references(
        db: &DatabaseConnection,
        mut input: GameInput,
    ) -> Result<Result<GameInput, Rejected<GameForm>>, AppError> {
        let (company, genres) = tokio::try_join!(
            CompanyRepository::find_by_id(db, input.company_id),
            GenreRepository::find_by_ids(db, &input.genre_ids),
        )?;

        input
            .genre_ids
            .retain(|id| genres.iter().any(|genre| genre.id == *id));

        if company.is_none() {
            tracing::info!(company_id = input.company_id, "Game references a missing company");
            return Ok(Err(Rejected {
                form: GameForm::from(&input),
                errors: vec![FieldError {
                    field: "company",
                    message: "Company required".to_string(),
                }],
            }));
        }
        Ok(Ok(input))
    }

    /// Insert a validated game with its publisher and genre links, unless a
    /// game with the same name exists.
    pub async fn create(
        db: &DatabaseConnection,
        uploads: &Path,
        input: GameInput,
        image: Option<ImageUpload>,
    ) -> Result<SaveOutcome, AppError> {
        if let Some(existing) = GameRepository::find_by_name(db, &input.name).await? {
            tracing::info!(game_id = existing.id, "Game name already taken");
            return Ok(SaveOutcome::NameTaken(existing.id));
        }

        let image = upload::store_image(uploads, image).await?;
        let id = GameRepository::insert(
            db,
            game::ActiveModel {
                name: Set(input.name.clone()),
                ps3: Set(input.available_on(Platform::Ps3)),
                ps4: Set(input.available_on(Platform::Ps4)),
                ps5: Set(input.available_on(Platform::Ps5)),
                copies: Set(input.copies),
                price: Set(input.price),
                image: Set(image),
                ..Default::default()
            },
        )
        .await?;

        GameRepository::link_company(db, id, input.company_id).await?;
        GameRepository::link_genres(db, id, &input.genre_ids).await?;

        tracing::info!(
            game_id = id,
            company_id = input.company_id,
            genres = input.genre_ids.len(),
            "Game created"
        );
        Ok(SaveOutcome::Saved(id))
    }

    /// Overwrite a game and replace its publisher and genre links.
    pub async fn update(
        db: &DatabaseConnection,
        uploads: &Path,
        id: i32,
        input: GameInput,
        image: Option<ImageUpload>,
    ) -> Result<SaveOutcome, AppError> {
        let existing = GameRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

        let taken = GameRepository::find_by_name(db, &input.name)
            .await?
            .filter(|other| other.id != id);
        if let Some(other) = taken {
            tracing::info!(game_id = id, other_id = other.id, "Game name already taken");
            return Ok(SaveOutcome::NameTaken(other.id));
        }

        let mut game: game::ActiveModel = existing.into();
        game.name = Set(input.name.clone());
        game.ps3 = Set(input.available_on(Platform::Ps3));
        game.ps4 = Set(input.available_on(Platform::Ps4));
        game.ps5 = Set(input.available_on(Platform::Ps5));
        game.copies = Set(input.copies);
        game.price = Set(input.price);
        if let Some(file) = upload::store_image(uploads, image).await? {
            game.image = Set(Some(file));
        }
        GameRepository::update(db, game).await?;

        GameRepository::replace_company(db, id, input.company_id).await?;
        GameRepository::unlink_genres(db, id).await?;
        GameRepository::link_genres(db, id, &input.genre_ids).await?;

        tracing::info!(
            game_id = id,
            company_id = input.company_id,
            genres = input.genre_ids.len(),
            "Game updated"
        );
        Ok(SaveOutcome::Saved(id))
    }

    /// Remove a game and its join rows. Returns whether the game existed.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
        GameRepository::unlink_genres(db, id).await?;
        GameRepository::unlink_company(db, id).await?;
        let removed = GameRepository::delete_by_id(db, id).await? > 0;

        if removed {
            tracing::info!(game_id = id, "Game deleted");
        }
        Ok(removed)
    }
}
