use sea_orm::{DatabaseConnection, Set};

use super::{DeleteOutcome, SaveOutcome};
use crate::entities::{game, genre};
use crate::error::AppError;
use crate::repository::GenreRepository;
use crate::validation::GenreInput;

/// A genre with the games tagged with it.
#[derive(Debug, Clone)]
pub struct GenreDetail {
    pub genre: genre::Model,
    pub games: Vec<game::Model>,
}

pub struct GenreService;

impl GenreService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<genre::Model>, AppError> {
        Ok(GenreRepository::find_all(db).await?)
    }

    pub async fn find(db: &DatabaseConnection, id: i32) -> Result<genre::Model, AppError> {
        GenreRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))
    }

    pub async fn find_with_games(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<GenreDetail>, AppError> {
        let (genre, games) = tokio::try_join!(
            GenreRepository::find_by_id(db, id),
            GenreRepository::find_games(db, id),
        )?;
        Ok(genre.map(|genre| GenreDetail { genre, games }))
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<GenreDetail, AppError> {
        Self::find_with_games(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))
    }

    pub async fn create(db: &DatabaseConnection, input: GenreInput) -> Result<SaveOutcome, AppError> {
        if let Some(existing) = GenreRepository::find_by_name(db, &input.name).await? {
            tracing::info!(genre_id = existing.id, "Genre name already taken");
            return Ok(SaveOutcome::NameTaken(existing.id));
        }

        let id = GenreRepository::insert(
            db,
            genre::ActiveModel {
                name: Set(input.name),
                ..Default::default()
            },
        )
        .await?;

        tracing::info!(genre_id = id, "Genre created");
        Ok(SaveOutcome::Saved(id))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: GenreInput,
    ) -> Result<SaveOutcome, AppError> {
        let existing = Self::find(db, id).await?;

        let taken = GenreRepository::find_by_name(db, &input.name)
            .await?
            .filter(|other| other.id != id);
        if let Some(other) = taken {
            tracing::info!(genre_id = id, other_id = other.id, "Genre name already taken");
            return Ok(SaveOutcome::NameTaken(other.id));
        }

        let mut genre: genre::ActiveModel = existing.into();
        genre.name = Set(input.name);
        GenreRepository::update(db, genre).await?;

        tracing::info!(genre_id = id, "Genre updated");
        Ok(SaveOutcome::Saved(id))
    }

    /// Delete a genre no game is tagged with.
    pub async fn delete(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<DeleteOutcome<genre::Model>, AppError> {
        let Some(GenreDetail { genre, games }) = Self::find_with_games(db, id).await? else {
            return Ok(DeleteOutcome::Missing);
        };

        if !games.is_empty() {
            tracing::warn!(genre_id = id, games = games.len(), "Genre delete blocked");
            return Ok(DeleteOutcome::Blocked {
                entity: genre,
                games,
            });
        }

        GenreRepository::delete_by_id(db, id).await?;
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
